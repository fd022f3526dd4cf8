use std::time::Duration;

use microlearn_core::Clock;
use microlearn_core::model::User;
use storage::repository::{StateStore, keys};

use crate::error::AuthError;

/// Default simulated network latency for mock auth calls.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Session state: the current (mocked) user identity.
///
/// Every successful login/signup persists the full user record under the
/// fixed user key; logout removes it. Mutating operations take `&mut self`,
/// so a second call cannot start while one is suspended at the artificial
/// delay.
pub struct AuthService {
    store: StateStore,
    clock: Clock,
    latency: Duration,
    user: Option<User>,
    last_error: Option<String>,
}

impl AuthService {
    #[must_use]
    pub fn new(store: StateStore, clock: Clock) -> Self {
        Self {
            store,
            clock,
            latency: DEFAULT_AUTH_LATENCY,
            user: None,
            last_error: None,
        }
    }

    /// Overrides the simulated latency. Use `Duration::ZERO` in tests.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Restores a previously persisted user, if any.
    ///
    /// A malformed stored value is discarded and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only for backend failures.
    pub async fn restore(&mut self) -> Result<(), AuthError> {
        self.user = self.store.load(keys::USER).await?;
        Ok(())
    }

    /// Mock login: any email containing `@` plus a non-empty password.
    ///
    /// The display name is derived from the email local part. A failed call
    /// leaves the current user untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` or `AuthError::InvalidEmail`
    /// on validation failure, `AuthError::Storage` if persistence fails.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.last_error = None;
        tokio::time::sleep(self.latency).await;

        if email.is_empty() || password.is_empty() {
            return Err(self.fail(AuthError::MissingCredentials));
        }
        if !email.contains('@') {
            return Err(self.fail(AuthError::InvalidEmail));
        }

        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or(email);
        let user = match User::generate(email, name) {
            Ok(user) => user,
            Err(_) => return Err(self.fail(AuthError::InvalidEmail)),
        };
        self.set_current(user).await
    }

    /// Mock signup: all fields required, password at least 6 characters.
    ///
    /// # Errors
    ///
    /// Returns a validation `AuthError` on bad input, `AuthError::Storage` if
    /// persistence fails.
    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, AuthError> {
        self.last_error = None;
        tokio::time::sleep(self.latency).await;

        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(self.fail(AuthError::MissingFields));
        }
        if !email.contains('@') {
            return Err(self.fail(AuthError::InvalidEmail));
        }
        if password.chars().count() < 6 {
            return Err(self.fail(AuthError::PasswordTooShort));
        }

        let user = match User::generate(email, name) {
            Ok(user) => user,
            Err(_) => return Err(self.fail(AuthError::InvalidEmail)),
        };
        self.set_current(user).await
    }

    /// Mock federated login: unconditionally succeeds after the delay,
    /// synthesizing an identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if persistence fails.
    pub async fn google_login(&mut self) -> Result<&User, AuthError> {
        self.last_error = None;
        tokio::time::sleep(self.latency).await;

        let millis = self.clock.now().timestamp_millis();
        let user = match User::generate(format!("user_{millis}@gmail.com"), "Google User") {
            Ok(user) => user,
            Err(_) => return Err(self.fail(AuthError::InvalidEmail)),
        };
        self.set_current(user).await
    }

    /// Clears the current user and any recorded error, and removes the
    /// persisted record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the removal fails.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.user = None;
        self.last_error = None;
        self.store.remove(keys::USER).await?;
        Ok(())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Last user-visible error message, for inline display.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    async fn set_current(&mut self, user: User) -> Result<&User, AuthError> {
        if let Err(err) = self.store.save(keys::USER, &user).await {
            return Err(self.fail(AuthError::Storage(err)));
        }
        tracing::debug!(user_id = user.id(), "session user changed");
        Ok(self.user.insert(user))
    }

    fn fail(&mut self, err: AuthError) -> AuthError {
        self.last_error = Some(err.to_string());
        err
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::repository::{InMemoryStore, KeyValueStore};

    fn service() -> (AuthService, InMemoryStore) {
        let kv = InMemoryStore::new();
        let store = StateStore::new(Arc::new(kv.clone()));
        let svc = AuthService::new(store, fixed_clock()).with_latency(Duration::ZERO);
        (svc, kv)
    }

    #[tokio::test]
    async fn login_with_empty_fields_fails_and_leaves_user_unchanged() {
        let (mut svc, _) = service();
        let err = svc.login("", "").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
        assert!(!svc.is_logged_in());
        assert_eq!(svc.last_error(), Some("Email and password are required"));
    }

    #[tokio::test]
    async fn login_rejects_email_without_at_sign() {
        let (mut svc, _) = service();
        let err = svc.login("nobody", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail));
        assert!(!svc.is_logged_in());
    }

    #[tokio::test]
    async fn login_derives_name_from_email_local_part() {
        let (mut svc, kv) = service();
        let user = svc.login("ann@example.com", "pw").await.unwrap();
        assert_eq!(user.name(), "ann");
        assert_eq!(user.email(), "ann@example.com");
        assert!(svc.is_logged_in());
        assert!(kv.get(keys::USER).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn signup_rejects_short_password() {
        let (mut svc, _) = service();
        let err = svc.signup("a@b.com", "12345", "A").await.unwrap_err();
        assert!(matches!(err, AuthError::PasswordTooShort));
        assert!(!svc.is_logged_in());
    }

    #[tokio::test]
    async fn signup_uses_supplied_name() {
        let (mut svc, _) = service();
        let user = svc.signup("a@b.com", "123456", "A").await.unwrap();
        assert_eq!(user.name(), "A");
    }

    #[tokio::test]
    async fn google_login_always_succeeds() {
        let (mut svc, _) = service();
        let user = svc.google_login().await.unwrap();
        assert_eq!(user.name(), "Google User");
        assert!(user.email().ends_with("@gmail.com"));
    }

    #[tokio::test]
    async fn logout_clears_user_error_and_persisted_record() {
        let (mut svc, kv) = service();
        svc.login("ann@example.com", "pw").await.unwrap();
        let _ = svc.login("", "").await; // leaves an error message behind
        svc.logout().await.unwrap();

        assert!(!svc.is_logged_in());
        assert_eq!(svc.last_error(), None);
        assert_eq!(kv.get(keys::USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn restore_loads_persisted_user() {
        let (mut svc, kv) = service();
        svc.login("ann@example.com", "pw").await.unwrap();
        let saved = svc.user().cloned().unwrap();

        let store = StateStore::new(Arc::new(kv));
        let mut fresh = AuthService::new(store, fixed_clock()).with_latency(Duration::ZERO);
        fresh.restore().await.unwrap();
        assert_eq!(fresh.user(), Some(&saved));
    }

    #[tokio::test]
    async fn restore_discards_malformed_user() {
        let (_, kv) = service();
        kv.put(keys::USER, "{broken").await.unwrap();

        let store = StateStore::new(Arc::new(kv.clone()));
        let mut svc = AuthService::new(store, fixed_clock()).with_latency(Duration::ZERO);
        svc.restore().await.unwrap();
        assert!(!svc.is_logged_in());
        assert_eq!(kv.get(keys::USER).await.unwrap(), None);
    }
}
