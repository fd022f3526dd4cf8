use std::time::Duration;

use microlearn_core::model::{Lesson, QuizQuestion, TopicId};

mod lessons;
mod quizzes;

/// Simulated generation latencies.
///
/// Injected configuration rather than hidden constants so tests can run with
/// zero delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLatency {
    pub lesson: Duration,
    pub quiz: Duration,
}

impl ContentLatency {
    /// No delay at all, for tests.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            lesson: Duration::ZERO,
            quiz: Duration::ZERO,
        }
    }
}

impl Default for ContentLatency {
    fn default() -> Self {
        Self {
            lesson: Duration::from_millis(1500),
            quiz: Duration::from_millis(800),
        }
    }
}

/// Mock "AI" content generation: a lookup table of canned lessons and quizzes
/// behind an artificial delay.
///
/// Generation never fails; an unknown topic id degrades to the default
/// topic's content.
#[derive(Debug, Clone, Default)]
pub struct ContentProvider {
    latency: ContentLatency,
}

impl ContentProvider {
    #[must_use]
    pub fn new(latency: ContentLatency) -> Self {
        Self { latency }
    }

    /// Generates the lesson for a topic after the configured delay.
    pub async fn generate_lesson(&self, topic_id: &TopicId) -> Lesson {
        tokio::time::sleep(self.latency.lesson).await;
        lessons::lesson_for(topic_id)
    }

    /// Generates the quiz for a topic after the (shorter) configured delay.
    pub async fn generate_quiz(&self, topic_id: &TopicId) -> Vec<QuizQuestion> {
        tokio::time::sleep(self.latency.quiz).await;
        quizzes::quiz_for(topic_id)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::model::Topic;

    fn provider() -> ContentProvider {
        ContentProvider::new(ContentLatency::zero())
    }

    #[tokio::test]
    async fn every_catalog_topic_has_its_own_lesson_and_quiz() {
        let provider = provider();
        for topic in Topic::seed_catalog() {
            let lesson = provider.generate_lesson(topic.id()).await;
            assert_eq!(&lesson.topic_id, topic.id());
            assert!(!lesson.content.is_empty());
            assert!(!lesson.examples.is_empty());
            assert!(!lesson.tips.is_empty());

            let quiz = provider.generate_quiz(topic.id()).await;
            assert_eq!(quiz.len(), 5);
            assert!(quiz.iter().all(|q| q.options.len() == 4));
            assert!(quiz.iter().all(|q| q.correct < q.options.len()));
        }
    }

    #[tokio::test]
    async fn unknown_topic_falls_back_to_default() {
        let provider = provider();
        let unknown = TopicId::new("quantum");

        let lesson = provider.generate_lesson(&unknown).await;
        assert_eq!(lesson.topic_id, TopicId::new("arrays"));

        let quiz = provider.generate_quiz(&unknown).await;
        let default_quiz = provider.generate_quiz(&TopicId::new("arrays")).await;
        assert_eq!(quiz, default_quiz);
    }

    #[tokio::test]
    async fn question_ids_are_stable_within_a_quiz() {
        let quiz = provider().generate_quiz(&TopicId::new("python")).await;
        let ids: Vec<&str> = quiz.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4", "q5"]);
    }
}
