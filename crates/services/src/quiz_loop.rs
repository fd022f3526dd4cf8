use microlearn_core::Clock;
use microlearn_core::model::{Lesson, QuizResult, TopicId};

use crate::content::ContentProvider;
use crate::error::{ProgressError, QuizError};
use crate::progress_service::ProgressService;
use crate::quiz::QuizSession;
use crate::resume::{Resume, generate_resume};

/// Orchestrates content generation, quiz attempts, and progress recording.
///
/// The submit path is the single place where a finished attempt becomes both
/// a recorded result and a topic completion, so neither can happen without
/// the other.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    content: ContentProvider,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, content: ContentProvider) -> Self {
        Self { clock, content }
    }

    /// Returns the lesson for a topic, generating and caching it on first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if caching the generated lesson fails.
    pub async fn open_lesson(
        &self,
        topic_id: &TopicId,
        progress: &mut ProgressService,
    ) -> Result<Lesson, ProgressError> {
        if let Some(lesson) = progress.lesson(topic_id) {
            return Ok(lesson.clone());
        }
        self.regenerate_lesson(topic_id, progress).await
    }

    /// Generates a fresh lesson and overwrites any cached one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if caching fails.
    pub async fn regenerate_lesson(
        &self,
        topic_id: &TopicId,
        progress: &mut ProgressService,
    ) -> Result<Lesson, ProgressError> {
        let lesson = self.content.generate_lesson(topic_id).await;
        progress.set_lesson(topic_id.clone(), lesson.clone()).await?;
        Ok(lesson)
    }

    /// Loads the quiz for a topic and starts an attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the generated quiz has no questions.
    pub async fn start_quiz(&self, topic_id: &TopicId) -> Result<QuizSession, QuizError> {
        let questions = self.content.generate_quiz(topic_id).await;
        QuizSession::new(topic_id.clone(), questions)
    }

    /// Submits the attempt and records the result in progress state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete`/`QuizError::AlreadySubmitted` from the
    /// session, or `QuizError::Progress` if recording fails.
    pub async fn submit(
        &self,
        session: &mut QuizSession,
        progress: &mut ProgressService,
    ) -> Result<QuizResult, QuizError> {
        let result = session.submit(self.clock.now())?;
        progress.add_quiz_result(result.clone()).await?;
        Ok(result)
    }

    /// Builds the resume for the current progress state.
    #[must_use]
    pub fn build_resume(&self, user_name: &str, progress: &ProgressService) -> Resume {
        generate_resume(
            user_name,
            &progress.completed_topics(),
            progress.results(),
            self.clock.now().date_naive(),
        )
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLatency;
    use microlearn_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::repository::{InMemoryStore, StateStore};

    fn services() -> (QuizLoopService, ProgressService) {
        let store = StateStore::new(Arc::new(InMemoryStore::new()));
        let progress = ProgressService::new(store);
        let flow = QuizLoopService::new(
            fixed_clock(),
            ContentProvider::new(ContentLatency::zero()),
        );
        (flow, progress)
    }

    fn answer_all_correct(session: &mut QuizSession) {
        for i in 0..session.questions().len() {
            let correct = session.questions()[i].correct;
            session.select_answer(correct).unwrap();
            session.next_question();
        }
    }

    #[tokio::test]
    async fn open_lesson_generates_once_then_serves_the_cache() {
        let (flow, mut progress) = services();
        let topic = TopicId::new("react");

        assert!(progress.lesson(&topic).is_none());
        let first = flow.open_lesson(&topic, &mut progress).await.unwrap();
        assert_eq!(progress.lesson(&topic), Some(&first));

        let second = flow.open_lesson(&topic, &mut progress).await.unwrap();
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn submit_records_result_and_completes_topic() {
        let (flow, mut progress) = services();
        let topic = TopicId::new("math");

        let mut session = flow.start_quiz(&topic).await.unwrap();
        answer_all_correct(&mut session);
        let result = flow.submit(&mut session, &mut progress).await.unwrap();

        assert_eq!(result.score, 100);
        assert_eq!(progress.results().len(), 1);
        let record = progress
            .topics()
            .iter()
            .find(|t| t.id() == &topic)
            .unwrap();
        assert!(record.completed());
        assert_eq!(record.quiz_score(), Some(100));
        assert_eq!(record.attempts(), 1);
    }

    #[tokio::test]
    async fn retry_leaves_history_alone_until_the_next_submission() {
        let (flow, mut progress) = services();
        let topic = TopicId::new("web");

        let mut session = flow.start_quiz(&topic).await.unwrap();
        answer_all_correct(&mut session);
        flow.submit(&mut session, &mut progress).await.unwrap();
        assert_eq!(progress.results().len(), 1);

        session.retry();
        assert_eq!(progress.results().len(), 1);

        answer_all_correct(&mut session);
        flow.submit(&mut session, &mut progress).await.unwrap();
        assert_eq!(progress.results().len(), 2);
        let record = progress
            .topics()
            .iter()
            .find(|t| t.id() == &topic)
            .unwrap();
        assert_eq!(record.attempts(), 2);
    }

    #[tokio::test]
    async fn resume_reflects_progress_state() {
        let (flow, mut progress) = services();
        let mut session = flow.start_quiz(&TopicId::new("arrays")).await.unwrap();
        answer_all_correct(&mut session);
        flow.submit(&mut session, &mut progress).await.unwrap();

        let resume = flow.build_resume("Ann", &progress);
        assert_eq!(resume.skills, vec!["Arrays & Data Structures"]);
        assert_eq!(resume.quizzes_taken, 1);
        assert_eq!(resume.average_score, 100);
    }
}
