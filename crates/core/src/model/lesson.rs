use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;

/// Generated instructional text for one topic, plus worked examples and tips.
///
/// Created lazily the first time a lesson is requested for a topic and cached
/// keyed by topic id; regeneration overwrites the cached entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub topic_id: TopicId,
    pub topic_name: String,
    pub content: String,
    pub examples: Vec<String>,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_is_lossless() {
        let lesson = Lesson {
            topic_id: TopicId::new("arrays"),
            topic_name: "Arrays".into(),
            content: "Arrays are contiguous.".into(),
            examples: vec!["a = [1]".into()],
            tips: vec!["mind the bounds".into()],
        };
        let json = serde_json::to_string(&lesson).unwrap();
        let back: Lesson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lesson);
    }
}
