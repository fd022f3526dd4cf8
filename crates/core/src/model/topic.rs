use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// A fixed learning subject with its own progress tracking.
///
/// The catalog is seeded once and entries are only ever mutated in place,
/// never added or removed at runtime. The `completed`/`quiz_score` pair is a
/// denormalized mirror of the latest quiz result for fast display; it is only
/// updated through [`Topic::mark_complete`] so the invariant (attempts grow by
/// exactly 1 per completion, completion never reverts) holds in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    name: String,
    description: String,
    icon: String,
    color: String,
    completed: bool,
    quiz_score: Option<u32>,
    attempts: u32,
}

impl Topic {
    fn seed(id: &str, name: &str, description: &str, icon: &str, color: &str) -> Self {
        Self {
            id: TopicId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            color: color.to_owned(),
            completed: false,
            quiz_score: None,
            attempts: 0,
        }
    }

    /// The fixed topic catalog, in display order.
    #[must_use]
    pub fn seed_catalog() -> Vec<Self> {
        vec![
            Self::seed(
                "arrays",
                "Arrays",
                "Master data structures and array manipulation",
                "📊",
                "bg-blue-500",
            ),
            Self::seed(
                "python",
                "Python Basics",
                "Learn Python programming fundamentals",
                "🐍",
                "bg-green-500",
            ),
            Self::seed(
                "ai",
                "AI Fundamentals",
                "Introduction to artificial intelligence",
                "🤖",
                "bg-purple-500",
            ),
            Self::seed(
                "math",
                "Math Essentials",
                "Essential mathematics for programming",
                "∑",
                "bg-orange-500",
            ),
            Self::seed(
                "web",
                "Web Development",
                "Build web applications with HTML, CSS, JS",
                "🌐",
                "bg-red-500",
            ),
            Self::seed(
                "database",
                "Databases",
                "Learn SQL and database management",
                "🗄️",
                "bg-indigo-500",
            ),
            Self::seed(
                "react",
                "React",
                "Build interactive UIs with React",
                "⚛️",
                "bg-cyan-500",
            ),
            Self::seed(
                "typescript",
                "TypeScript",
                "Type-safe JavaScript development",
                "📝",
                "bg-blue-600",
            ),
        ]
    }

    /// Marks the topic complete, recording the score when one is supplied.
    ///
    /// Increments the attempt counter by exactly 1. A `None` score leaves any
    /// previously stored score in place. Completion is monotonic.
    pub fn mark_complete(&mut self, score: Option<u32>) {
        self.completed = true;
        if let Some(score) = score {
            self.quiz_score = Some(score);
        }
        self.attempts += 1;
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn quiz_score(&self) -> Option<u32> {
        self.quiz_score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
