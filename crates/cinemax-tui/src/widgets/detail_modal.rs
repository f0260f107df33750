//! Movie detail modal
//!
//! Renders over a dimmed copy of the screen. The panel rect is reported back
//! to the view so clicks can be classified as inside or on the backdrop.

use cinemax_app::load_state::LoadState;
use cinemax_core::{
    format_count, format_money, format_rating, format_runtime, group_crew_by_role, release_year,
    MovieDetail,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use super::placeholder;
use crate::theme::styles;

/// Panel size as a percentage of the screen
const WIDTH_PERCENT: u16 = 80;
const HEIGHT_PERCENT: u16 = 84;
const MIN_WIDTH: u16 = 40;

/// Cast members listed before the rest are cut
const MAX_CAST: usize = 10;

/// Where the panel goes for a given screen area
pub fn panel_area(area: Rect) -> Rect {
    modal_overlay::centered_rect_percent(WIDTH_PERCENT, HEIGHT_PERCENT, MIN_WIDTH, area)
}

/// Content area inside the panel border
pub fn content_area(panel: Rect) -> Rect {
    styles::modal_block("").inner(panel)
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::accent_bold()))
}

fn labeled<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

/// All text lines of a loaded detail record, before wrapping
pub fn detail_lines(detail: &MovieDetail) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(Span::styled(
        detail.title.as_str(),
        styles::text_bright_bold(),
    ))];

    if !detail.tagline.is_empty() {
        lines.push(Line::from(Span::styled(
            detail.tagline.as_str(),
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        )));
    }

    // Year · runtime · status, then the rating
    let mut meta: Vec<String> = Vec::new();
    if let Some(year) = release_year(&detail.release_date) {
        meta.push(year.to_string());
    }
    if let Some(runtime) = format_runtime(detail.runtime) {
        meta.push(runtime);
    }
    if !detail.status.is_empty() {
        meta.push(detail.status.clone());
    }
    let mut meta_spans = Vec::new();
    if detail.vote_average > 0.0 {
        meta_spans.push(Span::styled(
            format!("★ {}", format_rating(detail.vote_average)),
            styles::rating(),
        ));
        if detail.vote_count > 0 {
            meta_spans.push(Span::styled(
                format!(" ({} votes)", format_count(detail.vote_count)),
                styles::text_muted(),
            ));
        }
        meta_spans.push(Span::raw("  "));
    }
    meta_spans.push(Span::styled(meta.join(" · "), styles::text_secondary()));
    lines.push(Line::from(meta_spans));

    if !detail.genres.is_empty() {
        let mut chips = Vec::new();
        for genre in &detail.genres {
            chips.push(Span::styled(format!(" {} ", genre), styles::chip()));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
    }

    if !detail.overview.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Overview"));
        lines.push(Line::from(Span::styled(
            detail.overview.as_str(),
            styles::text_primary(),
        )));
    }

    let crew = group_crew_by_role(&detail.crew);
    if !detail.director.is_empty() || !crew.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Crew"));
        let director_listed = crew.iter().any(|(role, _)| role == "Director");
        if !detail.director.is_empty() && !director_listed {
            lines.push(labeled("Director", detail.director.clone()));
        }
        for (role, names) in crew {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", role), styles::text_muted()),
                Span::styled(names.join(", "), styles::text_primary()),
            ]));
        }
    }

    if !detail.cast.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Cast"));
        for member in detail.cast.iter().take(MAX_CAST) {
            let mut spans = vec![Span::styled(member.name.as_str(), styles::text_primary())];
            if !member.character.is_empty() {
                spans.push(Span::styled(
                    format!(" as {}", member.character),
                    styles::text_muted(),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let mut facts = Vec::new();
    if let Some(budget) = format_money(detail.budget) {
        facts.push(labeled("Budget", budget));
    }
    if let Some(revenue) = format_money(detail.revenue) {
        facts.push(labeled("Revenue", revenue));
    }
    if !detail.spoken_languages.is_empty() {
        facts.push(labeled("Languages", detail.spoken_languages.join(", ")));
    }
    if !detail.production_companies.is_empty() {
        facts.push(labeled("Production", detail.production_companies.join(", ")));
    }
    if !facts.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Details"));
        lines.extend(facts);
    }

    lines
}

/// Rows the record takes once wrapped to `width` columns
pub fn content_height(detail: &MovieDetail, width: u16) -> u16 {
    let rows = Paragraph::new(detail_lines(detail))
        .wrap(Wrap { trim: false })
        .line_count(width);
    rows.min(u16::MAX as usize) as u16
}

pub struct DetailModal<'a> {
    content: &'a LoadState<Box<MovieDetail>>,
    scroll: u16,
    tick: u64,
}

impl<'a> DetailModal<'a> {
    pub fn new(content: &'a LoadState<Box<MovieDetail>>) -> Self {
        Self {
            content,
            scroll: 0,
            tick: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let panel = panel_area(area);
        modal_overlay::clear_area(buf, panel);
        modal_overlay::render_shadow(buf, panel);

        let block = styles::modal_block(" Movie Details ").title_bottom(
            Line::from(vec![
                Span::styled(" Esc/x", styles::keybinding()),
                Span::styled(" close  ", styles::text_muted()),
                Span::styled("j/k", styles::keybinding()),
                Span::styled(" scroll ", styles::text_muted()),
            ])
            .right_aligned(),
        );
        let inner = block.inner(panel);
        block.render(panel, buf);

        match self.content {
            LoadState::Loaded(detail) => {
                Paragraph::new(detail_lines(detail))
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0))
                    .render(inner, buf);
            }
            LoadState::Failed(message) => {
                Paragraph::new(vec![
                    Line::default(),
                    Line::from(Span::styled(message.as_str(), styles::error())),
                ])
                .centered()
                .render(inner, buf);
            }
            LoadState::NotLoaded | LoadState::Loading => {
                placeholder::loading("Loading details", self.tick).render(inner, buf);
            }
        }
    }
}
