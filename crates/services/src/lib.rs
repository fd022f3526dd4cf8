#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod content;
pub mod error;
pub mod progress_service;
pub mod quiz;
pub mod quiz_loop;
pub mod resume;

pub use microlearn_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use content::{ContentLatency, ContentProvider};
pub use error::{AppServicesError, AuthError, ProgressError, QuizError};
pub use progress_service::ProgressService;
pub use quiz::{QuizPhase, QuizProgress, QuizSession};
pub use quiz_loop::QuizLoopService;
pub use resume::{Resume, generate_resume};
