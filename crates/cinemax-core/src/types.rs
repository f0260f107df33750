//! Movie domain types shared by the gateway, state and view layers

use serde::{Deserialize, Serialize};

/// Movie summary as returned by the list endpoints
/// (`/top-movies`, `/movies-by-genre`, `/recommend`).
///
/// Only `id` and `title` are guaranteed; every other field falls back to its
/// empty value when the service omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub runtime: f64,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub director: String,
}

impl Movie {
    /// Minimal summary with only an id and title
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_url: String::new(),
            vote_average: 0.0,
            release_date: String::new(),
            genres: Vec::new(),
            runtime: 0.0,
            tagline: String::new(),
            director: String::new(),
        }
    }
}

/// A billed cast member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
}

/// A key crew credit (director, writer, composer, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// Full record for the detail overlay (`/movie/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub runtime: f64,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub spoken_languages: Vec<String>,
    #[serde(default)]
    pub production_companies: Vec<String>,
    #[serde(default)]
    pub status: String,
}

impl MovieDetail {
    /// Minimal record with only an id and title
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_url: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            release_date: String::new(),
            genres: Vec::new(),
            runtime: 0.0,
            tagline: String::new(),
            director: String::new(),
            cast: Vec::new(),
            crew: Vec::new(),
            budget: 0,
            revenue: 0,
            spoken_languages: Vec::new(),
            production_companies: Vec::new(),
            status: String::new(),
        }
    }
}

/// Genre name with the number of movies tagged with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Section {
    #[default]
    Home,
    Discover,
    Genres,
    TopRated,
    Legal,
}

impl Section {
    /// Sections reachable from the header tabs, in display order
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Discover,
        Section::Genres,
        Section::TopRated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Discover => "Discover",
            Section::Genres => "Genres",
            Section::TopRated => "Top Rated",
            Section::Legal => "Legal",
        }
    }
}

/// Static pages linked from the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalPage {
    About,
    Privacy,
    Terms,
    Contact,
}

impl LegalPage {
    pub const ALL: [LegalPage; 4] = [
        LegalPage::About,
        LegalPage::Privacy,
        LegalPage::Terms,
        LegalPage::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LegalPage::About => "About Us",
            LegalPage::Privacy => "Privacy Policy",
            LegalPage::Terms => "Terms of Service",
            LegalPage::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_missing_fields_default() {
        let movie: Movie = serde_json::from_str(r#"{"id": 603, "title": "The Matrix"}"#).unwrap();
        assert_eq!(movie, Movie::new(603, "The Matrix"));
    }

    #[test]
    fn test_movie_full_payload() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets...",
            "poster_url": "https://image.tmdb.org/t/p/w500/x.jpg",
            "vote_average": 8.1,
            "release_date": "2010-07-14",
            "genres": ["Action", "Science Fiction"],
            "runtime": 148.0,
            "tagline": "Your mind is the scene of the crime.",
            "director": "Christopher Nolan"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(movie.runtime, 148.0);
        assert_eq!(movie.director, "Christopher Nolan");
    }

    #[test]
    fn test_movie_detail_defaults() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"id": 42, "title": "Answer", "overview": ""}"#).unwrap();
        assert!(detail.cast.is_empty());
        assert!(detail.crew.is_empty());
        assert_eq!(detail.budget, 0);
        assert_eq!(detail.vote_count, 0);
    }

    #[test]
    fn test_genre_count_defaults_to_zero() {
        let genre: Genre = serde_json::from_str(r#"{"name": "Drama"}"#).unwrap();
        assert_eq!(genre.count, 0);
    }

    #[test]
    fn test_nav_sections_exclude_legal() {
        assert!(!Section::NAV.contains(&Section::Legal));
        assert_eq!(Section::NAV[0], Section::Home);
        assert_eq!(Section::TopRated.label(), "Top Rated");
    }
}
