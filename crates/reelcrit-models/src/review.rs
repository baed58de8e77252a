use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sub-scores and the overall rating are integers in [0, SCORE_MAX].
pub const SCORE_MAX: u8 = 5;

/// Backend caps review bodies at 1000 characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// A published review. Scores the author left unset come back as 0, never
/// null; that convention must survive serialization round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Some backend payloads use `reviewId` instead of `id`.
    #[serde(alias = "reviewId")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acting: u8,
    #[serde(default)]
    pub cinematography: u8,
    #[serde(default)]
    pub originality: u8,
    #[serde(default)]
    pub entertainment: u8,
    #[serde(default)]
    pub story: u8,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub has_spoiler: bool,
    #[serde(default)]
    pub nick_name: String,
    pub created_at: DateTime<Utc>,
}

/// One of the caller's own reviews, as returned by the authorized listing.
/// Carries the movie it was written against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MyReview {
    pub review_id: String,
    pub movie_id: String,
    #[serde(default)]
    pub movie_name: String,
    #[serde(default)]
    pub movie_poster: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acting: u8,
    #[serde(default)]
    pub cinematography: u8,
    #[serde(default)]
    pub originality: u8,
    #[serde(default)]
    pub entertainment: u8,
    #[serde(default)]
    pub story: u8,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub has_spoiler: bool,
    pub created_at: DateTime<Utc>,
}

/// Review creation payload. Unset scores are transmitted as 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub acting: u8,
    #[serde(default)]
    pub cinematography: u8,
    #[serde(default)]
    pub originality: u8,
    #[serde(default)]
    pub entertainment: u8,
    #[serde(default)]
    pub story: u8,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub has_spoiler: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_accepts_review_id_alias() {
        let json = r#"{
            "reviewId": "r-9",
            "title": "Great",
            "description": "Loved it",
            "rating": 4,
            "nickName": "mina",
            "createdAt": "2024-05-01T10:30:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, "r-9");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn unset_scores_are_zero_not_null() {
        let json = r#"{
            "id": "r-1",
            "title": "Short",
            "createdAt": "2024-05-01T10:30:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.acting, 0);
        assert_eq!(review.story, 0);
        assert_eq!(review.rating, 0);
        assert!(!review.has_spoiler);

        // Must serialize back as 0, not be dropped.
        let value: serde_json::Value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["acting"], 0);
        assert_eq!(value["rating"], 0);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ReviewDraft {
            title: "t".into(),
            description: "d".into(),
            has_spoiler: true,
            rating: 3,
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["hasSpoiler"], true);
        assert_eq!(value["cinematography"], 0);
    }
}
