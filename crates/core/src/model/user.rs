use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("user id cannot be empty")]
    EmptyId,

    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("display name cannot be empty")]
    EmptyName,
}

/// An authenticated user for the current session.
///
/// Identities are mocked: ids are freshly minted on every login and nothing
/// outside session state holds a reference to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    email: String,
    name: String,
    avatar: Option<String>,
}

impl User {
    /// Creates a user with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if email or name is empty or whitespace-only.
    pub fn generate(
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, UserError> {
        Self::from_persisted(format!("user_{}", Uuid::new_v4()), email, name, None)
    }

    /// Rehydrates a user from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if any required field is empty.
    pub fn from_persisted(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<Self, UserError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserError::EmptyId);
        }
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }

        Ok(Self {
            id,
            email,
            name,
            avatar: avatar.filter(|a| !a.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
