use chrono::NaiveDate;
use serde::Serialize;

use microlearn_core::model::{QuizResult, TopicId};

/// Derived summary document built from completed topics and quiz history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub topics_learned: usize,
    pub quizzes_taken: usize,
    pub average_score: u32,
    pub completion_date: String,
}

/// Human-readable skill name for a topic; unmapped ids fall back to the id
/// itself.
fn skill_name(topic_id: &TopicId) -> String {
    match topic_id.as_str() {
        "arrays" => "Arrays & Data Structures".to_owned(),
        "python" => "Python Programming".to_owned(),
        "ai" => "Artificial Intelligence".to_owned(),
        "math" => "Mathematics & Algorithms".to_owned(),
        "web" => "Web Development".to_owned(),
        "database" => "Database Design & SQL".to_owned(),
        "react" => "React & Frontend Frameworks".to_owned(),
        "typescript" => "TypeScript & Type Safety".to_owned(),
        other => other.to_owned(),
    }
}

/// Builds a resume from completed topics and quiz history.
///
/// Pure: no side effects, no persistence. `today` is passed in so the output
/// stays deterministic under test.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_resume(
    user_name: &str,
    completed_topics: &[TopicId],
    quiz_results: &[QuizResult],
    today: NaiveDate,
) -> Resume {
    let skills: Vec<String> = completed_topics.iter().map(skill_name).collect();

    let total: u32 = quiz_results.iter().map(|r| r.score).sum();
    let average_score = if quiz_results.is_empty() {
        0
    } else {
        (f64::from(total) / quiz_results.len() as f64).round() as u32
    };

    let summary = format!(
        "Dedicated learner who has completed comprehensive micro-courses in {} technology areas. \
         Demonstrates strong grasp of fundamental concepts with an average quiz score of {average_score}%.",
        skills.len()
    );

    Resume {
        name: user_name.to_owned(),
        title: "AI-Powered Learning Professional".to_owned(),
        summary,
        skills,
        topics_learned: completed_topics.len(),
        quizzes_taken: quiz_results.len(),
        average_score,
        completion_date: today.format("%Y-%m-%d").to_string(),
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::time::fixed_now;

    fn result_for(topic: &str, score: u32) -> QuizResult {
        QuizResult {
            topic_id: TopicId::new(topic),
            score,
            total_questions: 5,
            answers: vec![0, 1, 2, 3, 0],
            timestamp: fixed_now(),
        }
    }

    #[test]
    fn maps_completed_topics_to_skill_names_and_averages_scores() {
        let completed = vec![TopicId::new("arrays"), TopicId::new("python")];
        let results = vec![result_for("arrays", 90), result_for("python", 70)];

        let resume = generate_resume("Ann", &completed, &results, fixed_now().date_naive());

        assert_eq!(
            resume.skills,
            vec!["Arrays & Data Structures", "Python Programming"]
        );
        assert_eq!(resume.average_score, 80);
        assert_eq!(resume.topics_learned, 2);
        assert_eq!(resume.quizzes_taken, 2);
        assert_eq!(resume.name, "Ann");
        assert_eq!(resume.title, "AI-Powered Learning Professional");
        assert_eq!(resume.completion_date, "2023-11-14");
        assert!(resume.summary.contains("2 technology areas"));
        assert!(resume.summary.contains("80%"));
    }

    #[test]
    fn unmapped_topic_falls_back_to_its_id() {
        let completed = vec![TopicId::new("quantum")];
        let resume = generate_resume("Ann", &completed, &[], fixed_now().date_naive());
        assert_eq!(resume.skills, vec!["quantum"]);
    }

    #[test]
    fn empty_history_yields_zero_average() {
        let resume = generate_resume("Ann", &[], &[], fixed_now().date_naive());
        assert_eq!(resume.average_score, 0);
        assert!(resume.skills.is_empty());
        assert_eq!(resume.quizzes_taken, 0);
    }
}
