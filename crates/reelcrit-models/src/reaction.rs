use serde::{Deserialize, Serialize};

/// A viewer's reaction to a single review. There is no toggle-off gesture:
/// changing a reaction means sending the opposite kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
    Good,
    Bad,
    #[default]
    None,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Good => "GOOD",
            ReactionKind::Bad => "BAD",
            ReactionKind::None => "NONE",
        }
    }
}

/// Aggregate good/bad counts for one review, recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCounts {
    pub review_id: String,
    #[serde(default)]
    pub good: u64,
    #[serde(default)]
    pub bad: u64,
}

/// Body of the viewer-reaction read; a missing field means no reaction yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewerReaction {
    #[serde(default)]
    pub reaction_type: ReactionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ReactionKind::Good).unwrap(), "\"GOOD\"");
        assert_eq!(serde_json::to_string(&ReactionKind::Bad).unwrap(), "\"BAD\"");
        let kind: ReactionKind = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(kind, ReactionKind::None);
    }

    #[test]
    fn missing_reaction_type_defaults_to_none() {
        let viewer: ViewerReaction = serde_json::from_str("{}").unwrap();
        assert_eq!(viewer.reaction_type, ReactionKind::None);
    }

    #[test]
    fn counts_default_to_zero() {
        let counts: ReactionCounts = serde_json::from_str(r#"{"reviewId": "r-1"}"#).unwrap();
        assert_eq!(counts.good, 0);
        assert_eq!(counts.bad, 0);
    }
}
