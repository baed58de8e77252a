use reelcrit_api::{ApiError, ReviewApi};
use reelcrit_models::Movie;
use std::collections::HashSet;

/// The first page asks for one fewer item than later pages, priming the
/// "load more" affordance.
pub const FIRST_PAGE_SIZE: u32 = 19;
pub const NEXT_PAGE_SIZE: u32 = 20;

/// Cursor-paginated movie search. The cursor is the id of the last movie
/// held; "has more" is inferred client-side from the page length.
pub struct SearchPager {
    query: Option<String>,
    movies: Vec<Movie>,
    has_more: bool,
    started: bool,
}

impl SearchPager {
    pub fn new(query: Option<String>) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()),
            movies: Vec::new(),
            has_more: true,
            started: false,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    fn next_fetch_size(&self) -> u32 {
        if self.started {
            NEXT_PAGE_SIZE
        } else {
            FIRST_PAGE_SIZE
        }
    }

    fn cursor(&self) -> Option<&str> {
        self.movies.last().map(|m| m.movie_id.as_str())
    }

    /// Fetch and absorb the next page; returns how many new movies arrived.
    pub async fn load_next(&mut self, api: &ReviewApi) -> Result<usize, ApiError> {
        if !self.has_more {
            return Ok(0);
        }
        let fetch_size = self.next_fetch_size();
        let cursor = self.cursor().map(str::to_owned);
        let page = api
            .search_movies(self.query.as_deref(), cursor.as_deref(), fetch_size)
            .await?;
        Ok(self.absorb(fetch_size, page))
    }

    /// A full page implies more may exist; a short page means exhaustion.
    /// Pages are deduplicated by movie id on append.
    pub fn absorb(&mut self, requested: u32, page: Vec<Movie>) -> usize {
        self.started = true;
        self.has_more = page.len() as u32 == requested;

        let existing: HashSet<String> =
            self.movies.iter().map(|m| m.movie_id.clone()).collect();
        let before = self.movies.len();
        self.movies
            .extend(page.into_iter().filter(|m| !existing.contains(&m.movie_id)));
        self.movies.len() - before
    }
}
