use crate::error::ApiError;
use reelcrit_models::{
    Member, Movie, MyReview, NewMovie, ReactionCounts, ReactionKind, Review, ReviewDraft,
    ViewerReaction, WatchlistEntry,
};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Pass the response through on success, classify the failure otherwise.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response).await)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Paginated movie search. The cursor is the id of the last movie already
/// seen; the backend filters by case-insensitive substring match on name.
pub async fn search_movies(
    client: &Client,
    base_url: &str,
    movie_name: Option<&str>,
    offset_id: Option<&str>,
    fetch_size: u32,
) -> Result<Vec<Movie>, ApiError> {
    let mut url = format!("{}/v1/api/movies?fetchSize={}", base_url, fetch_size);
    if let Some(name) = movie_name {
        url.push_str(&format!("&movieName={}", urlencoding::encode(name)));
    }
    if let Some(offset) = offset_id {
        url.push_str(&format!("&offsetId={}", urlencoding::encode(offset)));
    }

    debug!("searching movies: {}", url);
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// User-facing movie detail.
pub async fn get_movie(client: &Client, base_url: &str, movie_id: &str) -> Result<Movie, ApiError> {
    let url = format!(
        "{}/v1/api/movies/{}",
        base_url,
        urlencoding::encode(movie_id)
    );
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// Admin listing of every registered movie.
pub async fn list_movies(client: &Client, base_url: &str) -> Result<Vec<Movie>, ApiError> {
    let url = format!("{}/v1/movies", base_url);
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// Admin-facing movie detail.
pub async fn get_movie_admin(
    client: &Client,
    base_url: &str,
    movie_id: &str,
) -> Result<Movie, ApiError> {
    let url = format!("{}/v1/movies/{}", base_url, urlencoding::encode(movie_id));
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// Register a new movie (admin).
pub async fn create_movie(
    client: &Client,
    base_url: &str,
    movie: &NewMovie,
) -> Result<Movie, ApiError> {
    let url = format!("{}/v1/movies", base_url);
    let response = check(client.post(&url).json(movie).send().await?).await?;
    Ok(response.json().await?)
}

/// Multipart poster upload; the returned URL feeds the registration payload.
pub async fn upload_image(
    client: &Client,
    base_url: &str,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    let url = format!("{}/v1/upload", base_url);
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    let response = check(client.post(&url).multipart(form).send().await?).await?;
    let upload: UploadResponse = response.json().await?;
    Ok(upload.url)
}

/// All reviews for a movie, publicly readable.
pub async fn get_reviews(
    client: &Client,
    base_url: &str,
    movie_id: &str,
) -> Result<Vec<Review>, ApiError> {
    let url = format!(
        "{}/v1/movies/{}/reviews",
        base_url,
        urlencoding::encode(movie_id)
    );
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// Submit a review against a movie. Reviews are immutable once accepted.
pub async fn create_review(
    client: &Client,
    base_url: &str,
    token: &str,
    movie_id: &str,
    draft: &ReviewDraft,
) -> Result<(), ApiError> {
    let url = format!(
        "{}/v1/movies/{}/reviews",
        base_url,
        urlencoding::encode(movie_id)
    );
    check(
        client
            .post(&url)
            .header("Authorization", bearer(token))
            .json(draft)
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// Aggregate good/bad counts for every review of a movie.
pub async fn get_review_reactions(
    client: &Client,
    base_url: &str,
    movie_id: &str,
) -> Result<Vec<ReactionCounts>, ApiError> {
    let url = format!(
        "{}/v1/movies/{}/review-reaction",
        base_url,
        urlencoding::encode(movie_id)
    );
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}

/// The caller's own reaction to one review.
pub async fn get_viewer_reaction(
    client: &Client,
    base_url: &str,
    token: &str,
    review_id: &str,
) -> Result<ViewerReaction, ApiError> {
    let url = format!(
        "{}/v1/reviews/{}/reaction",
        base_url,
        urlencoding::encode(review_id)
    );
    let response = check(
        client
            .get(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(response.json().await?)
}

/// Set the caller's reaction. Sending the currently-active kind re-sends it
/// unchanged; there is no toggle-off.
pub async fn update_reaction(
    client: &Client,
    base_url: &str,
    token: &str,
    review_id: &str,
    kind: ReactionKind,
) -> Result<(), ApiError> {
    let url = format!(
        "{}/v1/reviews/{}/reaction?reactionType={}",
        base_url,
        urlencoding::encode(review_id),
        kind.as_str()
    );
    check(
        client
            .post(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// Every review the caller has written, with the movie each was written for.
pub async fn get_my_reviews(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<Vec<MyReview>, ApiError> {
    let url = format!("{}/v1/reviews", base_url);
    let response = check(
        client
            .get(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(response.json().await?)
}

/// Watchlist entries are movie ids only.
pub async fn get_watchlist(
    client: &Client,
    base_url: &str,
    token: &str,
) -> Result<Vec<WatchlistEntry>, ApiError> {
    let url = format!("{}/v1/watchlist", base_url);
    let response = check(
        client
            .get(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(response.json().await?)
}

pub async fn add_to_watchlist(
    client: &Client,
    base_url: &str,
    token: &str,
    movie_id: &str,
) -> Result<(), ApiError> {
    let url = format!(
        "{}/v1/watchlist/movies/{}",
        base_url,
        urlencoding::encode(movie_id)
    );
    check(
        client
            .post(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

pub async fn remove_from_watchlist(
    client: &Client,
    base_url: &str,
    token: &str,
    movie_id: &str,
) -> Result<(), ApiError> {
    let url = format!(
        "{}/v1/watchlist/movies/{}",
        base_url,
        urlencoding::encode(movie_id)
    );
    check(
        client
            .delete(&url)
            .header("Authorization", bearer(token))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// Resolve an opaque login token to a member record. Called once after the
/// external login flow hands the token back.
pub async fn get_member(client: &Client, base_url: &str, token: &str) -> Result<Member, ApiError> {
    let url = format!(
        "{}/v1/members?token={}",
        base_url,
        urlencoding::encode(token)
    );
    let response = check(client.get(&url).send().await?).await?;
    Ok(response.json().await?)
}
