//! Genres section: catalog on the left, movies of the selected genre on the right

use cinemax_app::genres::GenreBrowser;
use cinemax_app::load_state::LoadState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::movie_list::{scroll_offset, MovieList};
use super::placeholder;
use crate::theme::styles;

const CATALOG_WIDTH: u16 = 28;

pub struct GenrePanel<'a> {
    browser: &'a GenreBrowser,
    genre_cursor: usize,
    movie_cursor: usize,
    catalog_focused: bool,
    /// Results area has keyboard focus (as opposed to the search input)
    focused: bool,
    tick: u64,
}

impl<'a> GenrePanel<'a> {
    pub fn new(browser: &'a GenreBrowser) -> Self {
        Self {
            browser,
            genre_cursor: 0,
            movie_cursor: 0,
            catalog_focused: true,
            focused: false,
            tick: 0,
        }
    }

    pub fn cursors(mut self, genre_cursor: usize, movie_cursor: usize) -> Self {
        self.genre_cursor = genre_cursor;
        self.movie_cursor = movie_cursor;
        self
    }

    pub fn focus(mut self, focused: bool, catalog_focused: bool) -> Self {
        self.focused = focused;
        self.catalog_focused = catalog_focused;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn render_catalog(&self, area: Rect, buf: &mut Buffer) {
        let active = self.focused && self.catalog_focused;
        let block = styles::glass_block(active).title(" Genres ");
        let inner = block.inner(area);
        block.render(area, buf);

        let genres = match self.browser.catalog() {
            LoadState::Loaded(genres) if !genres.is_empty() => genres,
            LoadState::Loaded(_) | LoadState::Failed(_) => {
                placeholder::empty("No genres available.").render(inner, buf);
                return;
            }
            LoadState::NotLoaded | LoadState::Loading => {
                placeholder::loading("Loading genres", self.tick).render(inner, buf);
                return;
            }
        };

        let visible = inner.height as usize;
        let offset = if self.catalog_focused {
            scroll_offset(self.genre_cursor, visible)
        } else {
            0
        };
        let selected = self.browser.selected();

        for (row, (index, genre)) in genres.iter().enumerate().skip(offset).take(visible).enumerate()
        {
            let line_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let highlighted = self.catalog_focused && index == self.genre_cursor;
            let style = match (highlighted, active) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::unfocused_selected(),
                _ => styles::text_primary(),
            };
            if highlighted {
                buf.set_style(line_area, style);
            }
            let marker = if selected == Some(genre.name.as_str()) {
                "● "
            } else {
                "  "
            };
            let count_style = if highlighted { style } else { styles::text_muted() };
            Line::from(vec![
                Span::styled(marker, if highlighted { style } else { styles::accent() }),
                Span::styled(genre.name.as_str(), style),
                Span::styled(format!(" ({})", genre.count), count_style),
            ])
            .render(line_area, buf);
        }
    }

    fn render_movies(&self, area: Rect, buf: &mut Buffer) {
        let active = self.focused && !self.catalog_focused;
        let block = styles::glass_block(active);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(genre) = self.browser.selected() else {
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "Pick a genre to see its movies.",
                    styles::text_secondary(),
                )),
                Line::from(Span::styled(
                    "Enter toggles the highlighted genre.",
                    styles::text_muted(),
                )),
            ])
            .centered()
            .render(inner, buf);
            return;
        };

        match self.browser.movies() {
            LoadState::Loaded(movies) if !movies.is_empty() => {
                let title = Line::from(vec![
                    Span::styled(genre, styles::accent_bold()),
                    Span::styled(format!("  {} movies", movies.len()), styles::text_muted()),
                ]);
                let cursor = (!self.catalog_focused).then_some(self.movie_cursor);
                MovieList::new(title, movies)
                    .cursor(cursor, active)
                    .render(inner, buf);
            }
            LoadState::Loaded(_) | LoadState::Failed(_) => {
                placeholder::empty(&format!("No {} movies found.", genre)).render(inner, buf);
            }
            LoadState::NotLoaded | LoadState::Loading => {
                placeholder::loading(&format!("Loading {} movies", genre), self.tick)
                    .render(inner, buf);
            }
        }
    }
}

impl Widget for GenrePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let catalog_width = CATALOG_WIDTH.min(area.width / 2);
        let [catalog, movies] =
            Layout::horizontal([Constraint::Length(catalog_width), Constraint::Min(0)])
                .areas(area);
        self.render_catalog(catalog, buf);
        self.render_movies(movies, buf);
    }
}
