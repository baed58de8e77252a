use reelcrit_api::{ApiError, ReviewApi};
use reelcrit_models::{Review, ReviewDraft, DESCRIPTION_MAX_CHARS, SCORE_MAX};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{field} score {value} is out of range (0-{SCORE_MAX})")]
    ScoreOutOfRange { field: &'static str, value: u8 },
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description is {len} characters; the maximum is {DESCRIPTION_MAX_CHARS}")]
    DescriptionTooLong { len: usize },
}

#[derive(Debug, Error)]
pub enum ReviewSubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Reject drafts the backend would store incorrectly. Unset scores are 0 and
/// always valid; anything above the scale is refused rather than clamped.
pub fn validate_draft(draft: &ReviewDraft) -> Result<(), DraftError> {
    let scores = [
        ("acting", draft.acting),
        ("cinematography", draft.cinematography),
        ("originality", draft.originality),
        ("entertainment", draft.entertainment),
        ("story", draft.story),
        ("rating", draft.rating),
    ];
    for (field, value) in scores {
        if value > SCORE_MAX {
            return Err(DraftError::ScoreOutOfRange { field, value });
        }
    }
    if draft.title.trim().is_empty() {
        return Err(DraftError::EmptyTitle);
    }
    let len = draft.description.chars().count();
    if len > DESCRIPTION_MAX_CHARS {
        return Err(DraftError::DescriptionTooLong { len });
    }
    Ok(())
}

/// Validate, submit, then re-fetch the movie's review listing so the caller
/// renders server truth rather than a locally appended copy.
pub async fn submit_review(
    api: &ReviewApi,
    movie_id: &str,
    draft: &ReviewDraft,
) -> Result<Vec<Review>, ReviewSubmitError> {
    validate_draft(draft)?;
    api.create_review(movie_id, draft).await?;
    Ok(api.reviews(movie_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReviewDraft {
        ReviewDraft {
            title: "One-liner".into(),
            description: "Worth watching.".into(),
            acting: 4,
            cinematography: 3,
            originality: 5,
            entertainment: 4,
            story: 2,
            rating: 4,
            has_spoiler: false,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate_draft(&draft()), Ok(()));
    }

    #[test]
    fn zero_scores_are_valid_unset_markers() {
        let d = ReviewDraft {
            title: "t".into(),
            description: "d".into(),
            ..Default::default()
        };
        assert_eq!(validate_draft(&d), Ok(()));
    }

    #[test]
    fn score_above_five_is_rejected() {
        let mut d = draft();
        d.story = 6;
        assert_eq!(
            validate_draft(&d),
            Err(DraftError::ScoreOutOfRange {
                field: "story",
                value: 6
            })
        );
    }

    #[test]
    fn overall_rating_is_checked_too() {
        let mut d = draft();
        d.rating = 11;
        assert!(matches!(
            validate_draft(&d),
            Err(DraftError::ScoreOutOfRange {
                field: "rating",
                ..
            })
        ));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".into();
        assert_eq!(validate_draft(&d), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut d = draft();
        d.description = "글".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            validate_draft(&d),
            Err(DraftError::DescriptionTooLong {
                len: DESCRIPTION_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn description_at_the_limit_passes() {
        let mut d = draft();
        d.description = "a".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(validate_draft(&d), Ok(()));
    }
}
