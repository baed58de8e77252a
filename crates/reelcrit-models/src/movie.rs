use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: String,
    pub movie_name: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub actors: Vec<String>,
    /// Poster image URL; empty when the movie has no poster.
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub detail: MovieDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    /// Release date as the backend formats it.
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub country: String,
    /// Running time in minutes.
    #[serde(default)]
    pub running_time: u32,
    #[serde(default)]
    pub distributor: String,
}

/// Payload for registering a new movie (admin only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub movie_name: String,
    pub director: String,
    pub actors: Vec<String>,
    pub poster: String,
    pub detail: MovieDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_deserializes_backend_shape() {
        let json = r#"{
            "movieId": "m-1",
            "movieName": "The Host",
            "director": "Bong Joon-ho",
            "actors": ["Song Kang-ho", "Bae Doona"],
            "poster": "http://cdn.example/host.jpg",
            "detail": {
                "open": "2006-07-27",
                "categories": ["Thriller", "Drama"],
                "country": "KR",
                "runningTime": 120,
                "distributor": "Showbox"
            }
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.movie_id, "m-1");
        assert_eq!(movie.detail.running_time, 120);
        assert_eq!(movie.actors.len(), 2);
    }

    #[test]
    fn missing_detail_fields_default() {
        let json = r#"{"movieId": "m-2", "movieName": "Untitled", "detail": {}}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.detail.running_time, 0);
        assert!(movie.detail.categories.is_empty());
        assert!(movie.poster.is_empty());
    }
}
