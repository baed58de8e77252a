use futures::future::join_all;
use reelcrit_api::{ApiError, ReviewApi};
use reelcrit_models::{Movie, WatchlistEntry};
use std::future::Future;
use tracing::debug;

/// Add a movie, then re-fetch and resolve the whole watchlist.
pub async fn add_and_refresh(api: &ReviewApi, movie_id: &str) -> Result<Vec<Movie>, ApiError> {
    api.add_to_watchlist(movie_id).await?;
    resolve_watchlist(api).await
}

/// Remove a movie, then re-fetch and resolve the whole watchlist.
pub async fn remove_and_refresh(api: &ReviewApi, movie_id: &str) -> Result<Vec<Movie>, ApiError> {
    api.remove_from_watchlist(movie_id).await?;
    resolve_watchlist(api).await
}

/// Fetch the watchlist ids and resolve each to a full movie record. The id
/// listing itself failing is an error; individual detail lookups are not.
pub async fn resolve_watchlist(api: &ReviewApi) -> Result<Vec<Movie>, ApiError> {
    let entries = api.watchlist().await?;
    Ok(resolve_entries(&entries, |id| async move { api.movie(&id).await }).await)
}

/// Concurrent per-id detail lookups. A failed lookup silently drops that
/// entry; survivors keep their original relative order.
pub async fn resolve_entries<F, Fut>(entries: &[WatchlistEntry], lookup: F) -> Vec<Movie>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Movie, ApiError>>,
{
    let lookups = entries.iter().map(|entry| {
        let fut = lookup(entry.movie_id.clone());
        async move {
            match fut.await {
                Ok(movie) => Some(movie),
                Err(err) => {
                    debug!("dropping watchlist entry {}: {}", entry.movie_id, err);
                    None
                }
            }
        }
    });
    join_all(lookups).await.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcrit_models::MovieDetail;
    use reqwest::StatusCode;

    fn entry(id: &str) -> WatchlistEntry {
        WatchlistEntry {
            movie_id: id.to_string(),
        }
    }

    fn movie(id: &str) -> Movie {
        Movie {
            movie_id: id.to_string(),
            movie_name: format!("Movie {}", id),
            director: String::new(),
            actors: vec![],
            poster: String::new(),
            detail: MovieDetail::default(),
        }
    }

    fn backend_err() -> ApiError {
        ApiError::Backend {
            status: StatusCode::NOT_FOUND,
            message: "no such movie".into(),
            errors: vec![],
        }
    }

    #[tokio::test]
    async fn failed_lookup_is_dropped_order_preserved() {
        let entries = [entry("A"), entry("B"), entry("C")];
        let resolved = resolve_entries(&entries, |id| async move {
            if id == "B" {
                Err(backend_err())
            } else {
                Ok(movie(&id))
            }
        })
        .await;

        let ids: Vec<&str> = resolved.iter().map(|m| m.movie_id.as_str()).collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[tokio::test]
    async fn all_lookups_failing_yields_empty_list() {
        let entries = [entry("A"), entry("B")];
        let resolved =
            resolve_entries(&entries, |_| async move { Err::<Movie, _>(backend_err()) }).await;
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn empty_watchlist_resolves_empty() {
        let resolved = resolve_entries(&[], |id| async move { Ok(movie(&id)) }).await;
        assert!(resolved.is_empty());
    }
}
