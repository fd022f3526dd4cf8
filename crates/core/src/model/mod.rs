mod ids;
mod lesson;
mod quiz;
mod topic;
mod user;

pub use ids::TopicId;
pub use lesson::Lesson;
pub use quiz::{QuizQuestion, QuizResult, UNANSWERED};
pub use topic::Topic;
pub use user::{User, UserError};
