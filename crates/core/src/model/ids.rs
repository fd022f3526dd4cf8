use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a learning topic.
///
/// The catalog is a fixed enumerated set, but identifiers are kept open as
/// opaque strings so that an unknown id degrades gracefully (content falls
/// back to a default topic, progress mutations become silent misses) instead
/// of failing to parse.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a new `TopicId`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicId({})", self.0)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for TopicId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_display() {
        let id = TopicId::new("arrays");
        assert_eq!(id.to_string(), "arrays");
    }

    #[test]
    fn test_topic_id_from_str() {
        let id: TopicId = "python".parse().unwrap();
        assert_eq!(id, TopicId::new("python"));
    }

    #[test]
    fn test_topic_id_serde_transparent() {
        let id = TopicId::new("web");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"web\"");
        let back: TopicId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
