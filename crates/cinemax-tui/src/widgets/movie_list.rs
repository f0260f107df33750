//! Ranked movie lists and the featured hero card

use cinemax_core::{format_rating, format_runtime, release_year, Movie};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// First row index to draw so that `cursor` stays visible
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor.saturating_sub(visible - 1)
}

/// `"Inception (2010)"`, or the bare title when the year is unknown
pub fn title_with_year(movie: &Movie) -> String {
    match release_year(&movie.release_date) {
        Some(year) => format!("{} ({})", movie.title, year),
        None => movie.title.clone(),
    }
}

fn row_style(selected: bool, focused: bool) -> Style {
    match (selected, focused) {
        (true, true) => styles::focused_selected(),
        (true, false) => styles::unfocused_selected(),
        _ => styles::text_primary(),
    }
}

fn movie_row(movie: &Movie, rank: usize, selected: bool, focused: bool) -> Line<'_> {
    let base = row_style(selected, focused);
    let muted = if selected { base } else { styles::text_muted() };
    let rating = if selected { base } else { styles::rating() };

    let mut spans = vec![
        Span::styled(format!(" {:>3}  ", rank), muted),
        Span::styled(title_with_year(movie), base),
    ];
    if movie.vote_average > 0.0 {
        spans.push(Span::styled(
            format!("  ★ {}", format_rating(movie.vote_average)),
            rating,
        ));
    }
    if !movie.genres.is_empty() {
        spans.push(Span::styled(format!("  {}", movie.genres.join(" · ")), muted));
    }
    Line::from(spans).style(base)
}

/// Titled list of movies, ranked from `rank_from`
pub struct MovieList<'a> {
    title: Line<'a>,
    movies: &'a [Movie],
    cursor: Option<usize>,
    rank_from: usize,
    focused: bool,
}

impl<'a> MovieList<'a> {
    pub fn new(title: impl Into<Line<'a>>, movies: &'a [Movie]) -> Self {
        Self {
            title: title.into(),
            movies,
            cursor: None,
            rank_from: 1,
            focused: false,
        }
    }

    /// Highlight the row at `cursor`
    pub fn cursor(mut self, cursor: Option<usize>, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    pub fn rank_from(mut self, rank: usize) -> Self {
        self.rank_from = rank;
        self
    }
}

impl Widget for MovieList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        self.title.render(title_area, buf);

        let visible = list_area.height as usize;
        let offset = self
            .cursor
            .map(|c| scroll_offset(c, visible))
            .unwrap_or(0);

        for (row, (index, movie)) in self
            .movies
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let selected = self.cursor == Some(index);
            let line_area = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
            if selected {
                buf.set_style(line_area, row_style(true, self.focused));
            }
            movie_row(movie, index + self.rank_from, selected, self.focused).render(line_area, buf);
        }
    }
}

/// Featured movie card shown at the top of Home
pub struct HeroCard<'a> {
    movie: &'a Movie,
    selected: bool,
}

impl<'a> HeroCard<'a> {
    pub fn new(movie: &'a Movie, selected: bool) -> Self {
        Self { movie, selected }
    }

    fn meta_line(&self) -> Line<'a> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(year) = release_year(&self.movie.release_date) {
            parts.push(year.to_string());
        }
        if let Some(runtime) = format_runtime(self.movie.runtime) {
            parts.push(runtime);
        }
        if !self.movie.director.is_empty() {
            parts.push(format!("dir. {}", self.movie.director));
        }
        let mut spans = Vec::new();
        if self.movie.vote_average > 0.0 {
            spans.push(Span::styled(
                format!("★ {}  ", format_rating(self.movie.vote_average)),
                styles::rating(),
            ));
        }
        spans.push(Span::styled(parts.join(" · "), styles::text_secondary()));
        Line::from(spans)
    }
}

impl Widget for HeroCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.selected).title(Span::styled(
            " ★ Featured ",
            styles::rating().add_modifier(Modifier::BOLD),
        ));

        let mut lines = vec![
            Line::from(Span::styled(self.movie.title.as_str(), styles::text_bright_bold())),
            self.meta_line(),
        ];
        if !self.movie.tagline.is_empty() {
            lines.push(Line::from(Span::styled(
                self.movie.tagline.as_str(),
                styles::text_secondary().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.movie.overview.as_str(),
            styles::text_primary(),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
