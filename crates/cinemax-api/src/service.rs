//! Typed movie service operations
//!
//! Each method maps to one endpoint of the movie service. Envelopes such as
//! `{ "genres": [...] }` are unwrapped here so callers only see domain types.

use cinemax_core::prelude::*;
use cinemax_core::{Genre, Movie, MovieDetail};
use serde::{Deserialize, Serialize};

use crate::client::{encode_component, ApiClient};

/// Movie service operations used by the application
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Highest rated movies, best first
    async fn top_movies(&self) -> Result<Vec<Movie>>;

    /// Genre catalog with per-genre counts
    async fn genres(&self) -> Result<Vec<Genre>>;

    /// Movies tagged with `genre`
    async fn movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>>;

    /// Title suggestions for a typed prefix
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>>;

    /// Movies similar to `title`, most similar first
    async fn recommend(&self, title: &str) -> Result<Vec<Movie>>;

    /// Full record for one movie
    async fn movie_detail(&self, movie_id: i64) -> Result<MovieDetail>;
}

#[derive(Debug, Deserialize)]
struct GenresEnvelope {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct SuggestionsEnvelope {
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    title: &'a str,
}

/// [`MovieApi`] backed by the HTTP service
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: ApiClient,
}

impl HttpMovieApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Log the outcome of a request and pass it through
fn logged<T>(operation: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => debug!("{} succeeded", operation),
        Err(e) => warn!("{} failed: {}", operation, e),
    }
    result
}

impl MovieApi for HttpMovieApi {
    async fn top_movies(&self) -> Result<Vec<Movie>> {
        logged("top_movies", self.client.get("/top-movies", &[]).await)
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        let envelope: Result<GenresEnvelope> = self.client.get("/genres", &[]).await;
        logged("genres", envelope.map(|e| e.genres))
    }

    async fn movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        let result = self
            .client
            .get("/movies-by-genre", &[("genre", genre)])
            .await;
        logged(&format!("movies_by_genre({})", genre), result)
    }

    async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let envelope: Result<SuggestionsEnvelope> =
            self.client.get("/autocomplete", &[("q", query)]).await;
        logged(
            &format!("autocomplete({})", query),
            envelope.map(|e| e.suggestions),
        )
    }

    async fn recommend(&self, title: &str) -> Result<Vec<Movie>> {
        let result = self
            .client
            .post("/recommend", &RecommendRequest { title })
            .await;
        logged(&format!("recommend({})", title), result)
    }

    async fn movie_detail(&self, movie_id: i64) -> Result<MovieDetail> {
        let path = format!("/movie/{}", encode_component(&movie_id.to_string()));
        logged(
            &format!("movie_detail({})", movie_id),
            self.client.get(&path, &[]).await,
        )
    }
}
