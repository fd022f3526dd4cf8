use chrono::{DateTime, Utc};

use microlearn_core::model::{QuizQuestion, QuizResult, TopicId};

use crate::error::QuizError;

//
// ─── PROGRESS SNAPSHOT ─────────────────────────────────────────────────────────
//

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub can_submit: bool,
}

/// Lifecycle of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Submitted,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one quiz attempt.
///
/// Holds a cursor over the question list and one answer slot per question.
/// Selecting an answer overwrites the slot in place and never advances the
/// cursor; moving the cursor never touches answers. Submission requires every
/// question answered and is terminal for the attempt; `retry` starts a fresh
/// attempt without touching any previously recorded result.
#[derive(Debug)]
pub struct QuizSession {
    topic_id: TopicId,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<Option<usize>>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Creates a session over a loaded question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(topic_id: TopicId, questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            topic_id,
            questions,
            current: 0,
            answers,
            phase: QuizPhase::InProgress,
        })
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// The selected option for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers[self.current]
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.unanswered_count() == 0
    }

    /// Returns a summary of the current attempt.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let answered = total - self.unanswered_count();
        QuizProgress {
            total,
            answered,
            remaining: total - answered,
            can_submit: self.can_submit(),
        }
    }

    /// Records the selected option for the current question.
    ///
    /// Re-selecting overwrites in place; the cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadySubmitted` after submission and
    /// `QuizError::InvalidOption` for an out-of-range option index.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        if self.phase == QuizPhase::Submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if option >= self.current_question().options.len() {
            return Err(QuizError::InvalidOption { option });
        }
        self.answers[self.current] = Some(option);
        Ok(())
    }

    /// Advances the cursor, clamped to the last question. Answers are
    /// unaffected.
    pub fn next_question(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Retreats the cursor, clamped to the first question. Answers are
    /// unaffected.
    pub fn previous_question(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Submits the attempt, deriving the rounded score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while any question is unanswered and
    /// `QuizError::AlreadySubmitted` if the attempt was already submitted.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<QuizResult, QuizError> {
        if self.phase == QuizPhase::Submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let unanswered = self.unanswered_count();
        if unanswered > 0 {
            return Err(QuizError::Incomplete { unanswered });
        }

        self.phase = QuizPhase::Submitted;
        Ok(QuizResult::from_answers(
            self.topic_id.clone(),
            &self.questions,
            &self.answers,
            now,
        ))
    }

    /// Starts a fresh attempt: cursor to 0, all answers cleared, back to
    /// `InProgress`. Recorded results from earlier attempts are untouched.
    pub fn retry(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.questions.len()];
        self.phase = QuizPhase::InProgress;
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::time::fixed_now;

    fn question(id: &str, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.to_owned(),
            question: format!("{id}?"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        }
    }

    fn five_question_session() -> QuizSession {
        let questions = (1..=5).map(|i| question(&format!("q{i}"), 1)).collect();
        QuizSession::new(TopicId::new("python"), questions).unwrap()
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizSession::new(TopicId::new("python"), vec![]).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn selecting_overwrites_in_place_without_advancing() {
        let mut session = five_question_session();
        session.select_answer(0).unwrap();
        session.select_answer(3).unwrap();
        assert_eq!(session.current_answer(), Some(3));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = five_question_session();
        let err = session.select_answer(4).unwrap_err();
        assert!(matches!(err, QuizError::InvalidOption { option: 4 }));
        assert_eq!(session.current_answer(), None);
    }

    #[test]
    fn cursor_is_clamped_and_leaves_answers_alone() {
        let mut session = five_question_session();
        session.select_answer(2).unwrap();

        session.previous_question();
        assert_eq!(session.current_index(), 0);

        for _ in 0..10 {
            session.next_question();
        }
        assert_eq!(session.current_index(), 4);
        assert_eq!(session.answers()[0], Some(2));
    }

    #[test]
    fn submit_is_blocked_while_any_question_is_unanswered() {
        let mut session = five_question_session();
        for _ in 0..4 {
            session.select_answer(1).unwrap();
            session.next_question();
        }
        // 4 of 5 answered.
        assert!(!session.can_submit());
        let err = session.submit(fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::Incomplete { unanswered: 1 }));
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn submit_scores_and_is_terminal() {
        let mut session = five_question_session();
        // Answer 4 of 5 correctly.
        for i in 0..5 {
            session.select_answer(if i == 0 { 0 } else { 1 }).unwrap();
            session.next_question();
        }
        let result = session.submit(fixed_now()).unwrap();
        assert_eq!(result.score, 80);
        assert_eq!(result.total_questions, 5);
        assert_eq!(session.phase(), QuizPhase::Submitted);

        let err = session.submit(fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::AlreadySubmitted));
        let err = session.select_answer(0).unwrap_err();
        assert!(matches!(err, QuizError::AlreadySubmitted));
    }

    #[test]
    fn retry_resets_cursor_answers_and_phase() {
        let mut session = five_question_session();
        for _ in 0..5 {
            session.select_answer(1).unwrap();
            session.next_question();
        }
        session.submit(fixed_now()).unwrap();

        session.retry();
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.unanswered_count(), 5);
    }

    #[test]
    fn progress_snapshot_tracks_answered_count() {
        let mut session = five_question_session();
        session.select_answer(1).unwrap();
        session.next_question();
        session.select_answer(2).unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 5);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.remaining, 3);
        assert!(!progress.can_submit);
    }
}
