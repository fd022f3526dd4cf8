use std::collections::HashMap;

use microlearn_core::model::{Lesson, QuizResult, Topic, TopicId};
use storage::repository::{StateStore, keys};

use crate::error::ProgressError;

/// Progress state: the topic catalog, lesson cache, and quiz history.
///
/// Each of the three collections is persisted under its own key every time it
/// changes and restored independently at startup, so one corrupted slice
/// never takes the others down with it.
pub struct ProgressService {
    store: StateStore,
    topics: Vec<Topic>,
    lessons: HashMap<TopicId, Lesson>,
    results: Vec<QuizResult>,
}

impl ProgressService {
    /// Creates progress state with the seeded catalog and empty collections.
    #[must_use]
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            topics: Topic::seed_catalog(),
            lessons: HashMap::new(),
            results: Vec::new(),
        }
    }

    /// Restores the three persisted slices, each independently.
    ///
    /// A missing or malformed slice is left at its default (seed catalog,
    /// empty lessons, empty results).
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` only for backend failures.
    pub async fn load(&mut self) -> Result<(), ProgressError> {
        if let Some(topics) = self.store.load(keys::TOPICS).await? {
            self.topics = topics;
        }
        if let Some(lessons) = self.store.load(keys::LESSONS).await? {
            self.lessons = lessons;
        }
        if let Some(results) = self.store.load(keys::QUIZ_RESULTS).await? {
            self.results = results;
        }
        Ok(())
    }

    /// Aggregate completion percentage, rounded to an integer 0–100.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_progress(&self) -> u32 {
        if self.topics.is_empty() {
            return 0;
        }
        let completed = self.topics.iter().filter(|t| t.completed()).count();
        (completed as f64 / self.topics.len() as f64 * 100.0).round() as u32
    }

    /// Marks a topic complete and persists the catalog.
    ///
    /// An unknown topic id is a silent miss, not an error: the catalog is
    /// fixed and callers are expected to pass known identifiers.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if persistence fails.
    pub async fn mark_topic_complete(
        &mut self,
        topic_id: &TopicId,
        score: Option<u32>,
    ) -> Result<(), ProgressError> {
        let Some(topic) = self.topics.iter_mut().find(|t| t.id() == topic_id) else {
            tracing::debug!(%topic_id, "mark_topic_complete for unknown topic ignored");
            return Ok(());
        };
        topic.mark_complete(score);
        self.store.save(keys::TOPICS, &self.topics).await?;
        Ok(())
    }

    /// Inserts or overwrites the cached lesson for a topic and persists the
    /// lesson cache.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if persistence fails.
    pub async fn set_lesson(
        &mut self,
        topic_id: TopicId,
        lesson: Lesson,
    ) -> Result<(), ProgressError> {
        self.lessons.insert(topic_id, lesson);
        self.store.save(keys::LESSONS, &self.lessons).await?;
        Ok(())
    }

    /// Appends a quiz result and updates the matching topic.
    ///
    /// The append and the completion update are coupled here on purpose: a
    /// result is never recorded without the corresponding topic update, and
    /// the topic's redundant score/completed fields change through no other
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if persistence fails.
    pub async fn add_quiz_result(&mut self, result: QuizResult) -> Result<(), ProgressError> {
        let topic_id = result.topic_id.clone();
        let score = result.score;
        self.results.push(result);
        self.store.save(keys::QUIZ_RESULTS, &self.results).await?;
        self.mark_topic_complete(&topic_id, Some(score)).await
    }

    /// Sum of all recorded result scores.
    #[must_use]
    pub fn get_total_score(&self) -> u32 {
        self.results.iter().map(|r| r.score).sum()
    }

    /// Rounded mean of recorded scores; 0 when there are no results.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_average_score(&self) -> u32 {
        if self.results.is_empty() {
            return 0;
        }
        (f64::from(self.get_total_score()) / self.results.len() as f64).round() as u32
    }

    /// Completed topic ids, in catalog order.
    #[must_use]
    pub fn completed_topics(&self) -> Vec<TopicId> {
        self.topics
            .iter()
            .filter(|t| t.completed())
            .map(|t| t.id().clone())
            .collect()
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn lesson(&self, topic_id: &TopicId) -> Option<&Lesson> {
        self.lessons.get(topic_id)
    }

    #[must_use]
    pub fn lessons(&self) -> &HashMap<TopicId, Lesson> {
        &self.lessons
    }

    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
