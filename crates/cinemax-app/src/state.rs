//! Application state (Model in TEA pattern)

use std::time::Duration;

use cinemax_core::{LegalPage, Movie, Section};

use crate::config::Settings;
use crate::detail::DetailOverlay;
use crate::genres::GenreBrowser;
use crate::load_state::LoadState;
use crate::recommendation::RecommendationSession;
use crate::suggestions::SuggestionEngine;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Results,
}

/// Pane of the Genres section that owns the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenrePane {
    #[default]
    Catalog,
    Movies,
}

/// What the main content area renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    Legal(LegalPage),
    /// Search results, loading indicator or inline error
    Recommendations,
    /// Featured movie followed by the rest of the top list
    Home,
    Genres,
    /// Full top-rated list
    TopRated,
}

/// Cursor positions standing in for page scroll
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Index into the movie list of the current view
    pub cursor: usize,
    /// Index into the genre catalog
    pub genre_cursor: usize,
    pub genre_pane: GenrePane,
}

impl PageState {
    pub fn scroll_to_top(&mut self) {
        self.cursor = 0;
        self.genre_cursor = 0;
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Section selected in the header
    pub section: Section,

    /// Legal page shown instead of the section content
    pub legal_page: Option<LegalPage>,

    pub focus: Focus,

    /// Text in the search input
    pub search_input: String,

    pub suggestions: SuggestionEngine,
    pub recommendations: RecommendationSession,
    pub genres: GenreBrowser,
    pub top_movies: LoadState<Vec<Movie>>,
    pub detail: DetailOverlay,
    pub page: PageState,

    pub settings: Settings,

    /// Animation frame counter, advanced on every tick
    pub tick: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Page scrolling is suspended while the detail overlay is open.
    ///
    /// Derived rather than stored, so every way of closing the overlay
    /// restores it.
    pub fn page_scroll_suspended(&self) -> bool {
        self.detail.is_open()
    }

    pub fn debounce(&self) -> Duration {
        self.settings.search.debounce()
    }

    pub fn min_query_chars(&self) -> usize {
        self.settings.search.min_query_chars
    }

    pub fn content_view(&self) -> ContentView {
        if let Some(page) = self.legal_page {
            return ContentView::Legal(page);
        }
        if !self.recommendations.is_idle() {
            return ContentView::Recommendations;
        }
        match self.section {
            Section::Home | Section::Legal => ContentView::Home,
            Section::Genres => ContentView::Genres,
            Section::Discover | Section::TopRated => ContentView::TopRated,
        }
    }

    /// Movies the cursor moves over in the current view
    pub fn visible_movies(&self) -> &[Movie] {
        match self.content_view() {
            ContentView::Recommendations => self.recommendations.results(),
            ContentView::Home | ContentView::TopRated => self.top_movies.items(),
            ContentView::Genres => self.genres.movies().items(),
            ContentView::Legal(_) => &[],
        }
    }

    /// Genre catalog pane has the cursor
    pub fn genre_catalog_focused(&self) -> bool {
        self.content_view() == ContentView::Genres
            && (self.page.genre_pane == GenrePane::Catalog || self.genres.selected().is_none())
    }

    /// Length of the list the cursor currently moves over
    pub fn cursor_len(&self) -> usize {
        if self.genre_catalog_focused() {
            self.genres.genres().len()
        } else {
            self.visible_movies().len()
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        if self.genre_catalog_focused() {
            return None;
        }
        self.visible_movies().get(self.page.cursor)
    }

    pub fn highlighted_genre(&self) -> Option<&str> {
        if !self.genre_catalog_focused() {
            return None;
        }
        self.genres
            .genres()
            .get(self.page.genre_cursor)
            .map(|g| g.name.as_str())
    }

    /// Move the active cursor by `delta`, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.cursor_len();
        let cursor = if self.genre_catalog_focused() {
            &mut self.page.genre_cursor
        } else {
            &mut self.page.cursor
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let next = (*cursor as isize + delta).clamp(0, len as isize - 1);
        *cursor = next as usize;
    }

    pub fn cursor_to_top(&mut self) {
        if self.genre_catalog_focused() {
            self.page.genre_cursor = 0;
        } else {
            self.page.cursor = 0;
        }
    }

    pub fn cursor_to_bottom(&mut self) {
        let last = self.cursor_len().saturating_sub(1);
        if self.genre_catalog_focused() {
            self.page.genre_cursor = last;
        } else {
            self.page.cursor = last;
        }
    }
}
