use crate::api;
use crate::error::ApiError;
use reelcrit_models::{
    Member, Movie, MyReview, NewMovie, ReactionCounts, ReactionKind, Review, ReviewDraft,
    ViewerReaction, WatchlistEntry,
};
use reqwest::Client;

/// Build the shared HTTP client. Transport-level defaults only; the service
/// configures no request timeouts.
pub fn create_client() -> Client {
    Client::builder()
        .user_agent(concat!("reelcrit/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Thin handle over the review backend: base URL, HTTP client, and an
/// optional bearer token for the authorized surface.
#[derive(Clone)]
pub struct ReviewApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ReviewApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: create_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::NotAuthenticated)
    }

    pub async fn search_movies(
        &self,
        movie_name: Option<&str>,
        offset_id: Option<&str>,
        fetch_size: u32,
    ) -> Result<Vec<Movie>, ApiError> {
        api::search_movies(
            &self.client,
            &self.base_url,
            movie_name,
            offset_id,
            fetch_size,
        )
        .await
    }

    pub async fn movie(&self, movie_id: &str) -> Result<Movie, ApiError> {
        api::get_movie(&self.client, &self.base_url, movie_id).await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        api::list_movies(&self.client, &self.base_url).await
    }

    pub async fn movie_admin(&self, movie_id: &str) -> Result<Movie, ApiError> {
        api::get_movie_admin(&self.client, &self.base_url, movie_id).await
    }

    pub async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        api::create_movie(&self.client, &self.base_url, movie).await
    }

    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        api::upload_image(&self.client, &self.base_url, file_name, bytes).await
    }

    pub async fn reviews(&self, movie_id: &str) -> Result<Vec<Review>, ApiError> {
        api::get_reviews(&self.client, &self.base_url, movie_id).await
    }

    pub async fn create_review(
        &self,
        movie_id: &str,
        draft: &ReviewDraft,
    ) -> Result<(), ApiError> {
        api::create_review(&self.client, &self.base_url, self.token()?, movie_id, draft).await
    }

    pub async fn review_reactions(&self, movie_id: &str) -> Result<Vec<ReactionCounts>, ApiError> {
        api::get_review_reactions(&self.client, &self.base_url, movie_id).await
    }

    pub async fn viewer_reaction(&self, review_id: &str) -> Result<ViewerReaction, ApiError> {
        api::get_viewer_reaction(&self.client, &self.base_url, self.token()?, review_id).await
    }

    pub async fn update_reaction(
        &self,
        review_id: &str,
        kind: ReactionKind,
    ) -> Result<(), ApiError> {
        api::update_reaction(&self.client, &self.base_url, self.token()?, review_id, kind).await
    }

    pub async fn my_reviews(&self) -> Result<Vec<MyReview>, ApiError> {
        api::get_my_reviews(&self.client, &self.base_url, self.token()?).await
    }

    pub async fn watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
        api::get_watchlist(&self.client, &self.base_url, self.token()?).await
    }

    pub async fn add_to_watchlist(&self, movie_id: &str) -> Result<(), ApiError> {
        api::add_to_watchlist(&self.client, &self.base_url, self.token()?, movie_id).await
    }

    pub async fn remove_from_watchlist(&self, movie_id: &str) -> Result<(), ApiError> {
        api::remove_from_watchlist(&self.client, &self.base_url, self.token()?, movie_id).await
    }

    pub async fn member(&self, token: &str) -> Result<Member, ApiError> {
        api::get_member(&self.client, &self.base_url, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = ReviewApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn authorized_calls_require_token() {
        let api = ReviewApi::new("http://localhost:8080");
        let err = api.watchlist().await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }
}
