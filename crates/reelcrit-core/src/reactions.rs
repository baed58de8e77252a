use futures::future::join_all;
use reelcrit_api::{ApiError, ReviewApi};
use reelcrit_models::{ReactionCounts, ReactionKind, Review};
use std::collections::HashMap;
use std::future::Future;
use tracing::{debug, warn};

/// Server truth read back after a reaction write. Replaces whatever the
/// caller held locally; no speculative increment survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRefresh {
    /// Aggregate counts for every review of the movie, keyed by review id.
    pub counts: HashMap<String, ReactionCounts>,
    /// The viewer's own reaction to the review that was just updated.
    pub viewer_reaction: ReactionKind,
}

/// Submit a reaction, then re-fetch both the movie's aggregate counts and
/// the viewer's own reaction. Sending the already-active kind re-sends it
/// unchanged; there is no toggle-off gesture.
pub async fn submit_reaction(
    api: &ReviewApi,
    movie_id: &str,
    review_id: &str,
    kind: ReactionKind,
) -> Result<ReactionRefresh, ApiError> {
    reconcile_reaction(
        kind,
        |k| async move { api.update_reaction(review_id, k).await },
        || async move { counts_by_review(api, movie_id).await },
        || async move { api.viewer_reaction(review_id).await.map(|v| v.reaction_type) },
    )
    .await
}

/// Write-then-read-back: the update must land before either read, and the
/// result carries only what the reads returned.
pub async fn reconcile_reaction<U, UFut, C, CFut, V, VFut>(
    kind: ReactionKind,
    update: U,
    counts: C,
    viewer: V,
) -> Result<ReactionRefresh, ApiError>
where
    U: FnOnce(ReactionKind) -> UFut,
    UFut: Future<Output = Result<(), ApiError>>,
    C: FnOnce() -> CFut,
    CFut: Future<Output = Result<HashMap<String, ReactionCounts>, ApiError>>,
    V: FnOnce() -> VFut,
    VFut: Future<Output = Result<ReactionKind, ApiError>>,
{
    update(kind).await?;
    let counts = counts().await?;
    let viewer_reaction = viewer().await?;
    Ok(ReactionRefresh {
        counts,
        viewer_reaction,
    })
}

/// Aggregate counts keyed by review id for quick joins against a review list.
pub async fn counts_by_review(
    api: &ReviewApi,
    movie_id: &str,
) -> Result<HashMap<String, ReactionCounts>, ApiError> {
    let counts = api.review_reactions(movie_id).await?;
    Ok(counts
        .into_iter()
        .map(|c| (c.review_id.clone(), c))
        .collect())
}

/// Counts for a review listing; a failed fetch degrades to an empty map so
/// the reviews themselves still render.
pub async fn counts_by_review_or_empty(
    api: &ReviewApi,
    movie_id: &str,
) -> HashMap<String, ReactionCounts> {
    let fetched = counts_by_review(api, movie_id).await;
    counts_or_empty(movie_id, fetched)
}

fn counts_or_empty(
    movie_id: &str,
    fetched: Result<HashMap<String, ReactionCounts>, ApiError>,
) -> HashMap<String, ReactionCounts> {
    match fetched {
        Ok(counts) => counts,
        Err(err) => {
            warn!("reaction counts unavailable for {}: {}", movie_id, err);
            HashMap::new()
        }
    }
}

/// The viewer's reaction to each review, fetched concurrently. A failed
/// lookup degrades to `NONE` without aborting its siblings.
pub async fn viewer_reactions(
    api: &ReviewApi,
    reviews: &[Review],
) -> HashMap<String, ReactionKind> {
    reactions_for_ids(reviews.iter().map(|r| r.id.as_str()), |id| async move {
        api.viewer_reaction(&id).await.map(|v| v.reaction_type)
    })
    .await
}

/// Fan-out over review ids with per-item failure isolation.
pub async fn reactions_for_ids<'a, I, F, Fut>(
    review_ids: I,
    lookup: F,
) -> HashMap<String, ReactionKind>
where
    I: Iterator<Item = &'a str>,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<ReactionKind, ApiError>>,
{
    let lookups = review_ids.map(|id| {
        let fut = lookup(id.to_string());
        async move {
            let kind = match fut.await {
                Ok(kind) => kind,
                Err(err) => {
                    debug!("viewer reaction lookup failed for {}: {}", id, err);
                    ReactionKind::None
                }
            };
            (id.to_string(), kind)
        }
    });
    join_all(lookups).await.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::cell::RefCell;

    fn backend_err() -> ApiError {
        ApiError::Backend {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".into(),
            errors: vec![],
        }
    }

    fn counts(review_id: &str, good: u64, bad: u64) -> ReactionCounts {
        ReactionCounts {
            review_id: review_id.to_string(),
            good,
            bad,
        }
    }

    #[tokio::test]
    async fn reconciliation_returns_what_the_reads_saw() {
        // Server state mutated by the write; both reads observe it.
        let good_cell = RefCell::new(3u64);
        let stored_cell = RefCell::new(ReactionKind::Bad);
        let good = &good_cell;
        let stored = &stored_cell;

        let refresh = reconcile_reaction(
            ReactionKind::Good,
            |kind| async move {
                *stored.borrow_mut() = kind;
                *good.borrow_mut() += 1;
                Ok(())
            },
            || async move {
                Ok(HashMap::from([(
                    "r-1".into(),
                    counts("r-1", *good.borrow(), 0),
                )]))
            },
            || async move { Ok(*stored.borrow()) },
        )
        .await
        .unwrap();

        assert_eq!(refresh.counts["r-1"].good, 4);
        assert_eq!(refresh.viewer_reaction, ReactionKind::Good);
    }

    #[tokio::test]
    async fn reconciliation_reads_run_after_the_write() {
        let calls_cell = RefCell::new(Vec::new());
        let calls = &calls_cell;

        reconcile_reaction(
            ReactionKind::Bad,
            |_| async move {
                calls.borrow_mut().push("update");
                Ok(())
            },
            || async move {
                calls.borrow_mut().push("counts");
                Ok(HashMap::new())
            },
            || async move {
                calls.borrow_mut().push("viewer");
                Ok(ReactionKind::Bad)
            },
        )
        .await
        .unwrap();

        assert_eq!(*calls.borrow(), ["update", "counts", "viewer"]);
    }

    #[tokio::test]
    async fn reconciliation_is_not_the_submitted_kind_alone() {
        // A write the server ignored: the read-back is what the caller gets.
        let refresh = reconcile_reaction(
            ReactionKind::Good,
            |_| async move { Ok(()) },
            || async move { Ok(HashMap::new()) },
            || async move { Ok(ReactionKind::None) },
        )
        .await
        .unwrap();

        assert_eq!(refresh.viewer_reaction, ReactionKind::None);
    }

    #[tokio::test]
    async fn failed_write_aborts_before_any_read() {
        let read_cell = RefCell::new(false);
        let read = &read_cell;

        let result = reconcile_reaction(
            ReactionKind::Good,
            |_| async move { Err(backend_err()) },
            || async move {
                *read.borrow_mut() = true;
                Ok(HashMap::new())
            },
            || async move {
                *read.borrow_mut() = true;
                Ok(ReactionKind::None)
            },
        )
        .await;

        assert!(result.is_err());
        assert!(!*read.borrow());
    }

    #[test]
    fn failed_counts_fetch_degrades_to_empty() {
        let map = counts_or_empty("m-1", Err(backend_err()));
        assert!(map.is_empty());

        let fetched = Ok(HashMap::from([("r-1".to_string(), counts("r-1", 2, 1))]));
        let map = counts_or_empty("m-1", fetched);
        assert_eq!(map["r-1"].bad, 1);
    }

    #[tokio::test]
    async fn failed_lookups_degrade_to_none() {
        let ids = ["r-1", "r-2", "r-3"];
        let result = reactions_for_ids(ids.iter().copied(), |id| async move {
            match id.as_str() {
                "r-1" => Ok(ReactionKind::Good),
                "r-2" => Err(backend_err()),
                _ => Ok(ReactionKind::Bad),
            }
        })
        .await;

        assert_eq!(result["r-1"], ReactionKind::Good);
        assert_eq!(result["r-2"], ReactionKind::None);
        assert_eq!(result["r-3"], ReactionKind::Bad);
    }

    #[tokio::test]
    async fn empty_review_list_yields_empty_map() {
        let result = reactions_for_ids(std::iter::empty(), |_| async move {
            Ok(ReactionKind::Good)
        })
        .await;
        assert!(result.is_empty());
    }
}
