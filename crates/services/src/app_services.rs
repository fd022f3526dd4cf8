use std::sync::Arc;
use std::time::Duration;

use storage::repository::{InMemoryStore, StateStore};

use crate::Clock;
use crate::auth_service::AuthService;
use crate::content::{ContentLatency, ContentProvider};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::quiz_loop::QuizLoopService;

/// Assembles the session, progress, and content services around one store.
///
/// This is the explicit initialization root: state objects are created here,
/// restored from storage here, and handed to callers by reference. There are
/// no ambient singletons.
pub struct AppServices {
    auth: AuthService,
    progress: ProgressService,
    flow: QuizLoopService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and restore persisted state.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the initial
    /// restore fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let store = StateStore::sqlite(db_url).await?;
        Self::bootstrap(store, clock, None, ContentLatency::default()).await
    }

    /// Build services over an in-memory store with zero latency, for tests
    /// and prototyping.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the initial restore fails.
    pub async fn new_in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        let store = StateStore::new(Arc::new(InMemoryStore::new()));
        Self::bootstrap(store, clock, Some(Duration::ZERO), ContentLatency::zero()).await
    }

    /// Build services over an existing store, restoring persisted state.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the initial restore fails.
    pub async fn with_store(
        store: StateStore,
        clock: Clock,
        auth_latency: Option<Duration>,
        content_latency: ContentLatency,
    ) -> Result<Self, AppServicesError> {
        Self::bootstrap(store, clock, auth_latency, content_latency).await
    }

    async fn bootstrap(
        store: StateStore,
        clock: Clock,
        auth_latency: Option<Duration>,
        content_latency: ContentLatency,
    ) -> Result<Self, AppServicesError> {
        let mut auth = AuthService::new(store.clone(), clock);
        if let Some(latency) = auth_latency {
            auth = auth.with_latency(latency);
        }
        let mut progress = ProgressService::new(store);
        let flow = QuizLoopService::new(clock, ContentProvider::new(content_latency));

        auth.restore().await?;
        progress.load().await?;

        Ok(Self {
            auth,
            progress,
            flow,
        })
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthService {
        &mut self.auth
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressService {
        &mut self.progress
    }

    #[must_use]
    pub fn flow(&self) -> &QuizLoopService {
        &self.flow
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_bootstrap_starts_clean() {
        let app = AppServices::new_in_memory(fixed_clock()).await.unwrap();
        assert!(!app.auth().is_logged_in());
        assert_eq!(app.progress().get_progress(), 0);
        assert_eq!(app.progress().topics().len(), 8);
    }
}
