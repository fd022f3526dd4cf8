//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AuthService`.
///
/// Validation failures are user-visible, retryable messages; none of them
/// mutate session state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the quiz state machine and its orchestration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("{unanswered} question(s) still unanswered")]
    Incomplete { unanswered: usize },

    #[error("option index {option} is out of range")]
    InvalidOption { option: usize },

    #[error("quiz attempt already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Progress(#[from] ProgressError),
}
