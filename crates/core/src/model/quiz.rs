use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// Sentinel recorded for a question that was never answered.
pub const UNANSWERED: i32 = -1;

/// A single multiple-choice question. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    /// Returns true if the given option index is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

/// An immutable record of one completed quiz attempt.
///
/// Appended to an append-only history; never mutated or removed within a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub topic_id: TopicId,
    pub score: u32,
    pub total_questions: u32,
    pub answers: Vec<i32>,
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    /// Builds a result from the selected answers, deriving the rounded score.
    ///
    /// Unanswered entries are recorded as [`UNANSWERED`] and count as wrong.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_answers(
        topic_id: TopicId,
        questions: &[QuizQuestion],
        answers: &[Option<usize>],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let correct = questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| a.is_some_and(|idx| q.is_correct(idx)))
            .count();
        let total = questions.len();
        let score = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };

        let answers = answers
            .iter()
            .map(|a| a.map_or(UNANSWERED, |idx| i32::try_from(idx).unwrap_or(UNANSWERED)))
            .collect();

        Self {
            topic_id,
            score,
            total_questions: u32::try_from(total).unwrap_or(u32::MAX),
            answers,
            timestamp,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
