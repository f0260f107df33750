//! Status bar widget
//!
//! Shows the input mode, the key hints for it and the footer links to the
//! legal pages.

use cinemax_app::state::{AppState, Focus};
use cinemax_core::LegalPage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Footer links: key, label, page
const FOOTER_LINKS: [(&str, &str, LegalPage); 4] = [
    ("A", "About", LegalPage::About),
    ("P", "Privacy", LegalPage::Privacy),
    ("T", "Terms", LegalPage::Terms),
    ("C", "Contact", LegalPage::Contact),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
    compact: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            compact: false,
        }
    }

    /// Mode pill and quit hint only
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn mode(&self) -> &'static str {
        if self.state.detail.is_open() {
            " DETAILS "
        } else if self.state.focus == Focus::Search {
            " SEARCH "
        } else {
            " BROWSE "
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.detail.is_open() {
            &[("Esc", "close"), ("j/k", "scroll")]
        } else if self.state.focus == Focus::Search {
            &[
                ("Enter", "search"),
                ("↑↓", "suggestions"),
                ("Tab", "browse"),
                ("^C", "quit"),
            ]
        } else {
            &[
                ("1-4", "sections"),
                ("/", "search"),
                ("Enter", "details"),
                ("s", "similar"),
                ("q", "quit"),
            ]
        }
    }

    fn left_line(&self) -> Line<'static> {
        let mut left = vec![Span::styled(self.mode(), styles::focused_selected()), Span::raw(" ")];
        if self.compact {
            left.push(Span::styled("q", styles::keybinding()));
            left.push(Span::styled(" quit", styles::text_muted()));
        } else {
            left.extend(hint_spans(self.hints()));
        }
        Line::from(left)
    }

    /// Column where the footer links start, if they fit next to the hints
    fn footer_x(&self, area: Rect) -> Option<u16> {
        if self.compact || area.height == 0 {
            return None;
        }
        let left_width = self.left_line().width() as u16;
        let right_width = footer_width();
        (left_width + right_width <= area.width).then(|| area.x + area.width - right_width)
    }

    /// Clickable footer links as drawn in `area`
    pub fn link_areas(&self, area: Rect) -> Vec<(Rect, LegalPage)> {
        let Some(mut x) = self.footer_x(area) else {
            return Vec::new();
        };
        let mut regions = Vec::new();
        for (key, label, page) in FOOTER_LINKS {
            let width = hint_width(key, label);
            // Trailing gap is not part of the link
            regions.push((Rect::new(x, area.y, width - 2, 1), page));
            x += width;
        }
        regions
    }
}

fn hint_width(key: &str, label: &str) -> u16 {
    (key.len() + label.len() + 3) as u16
}

fn footer_width() -> u16 {
    FOOTER_LINKS
        .iter()
        .map(|(key, label, _)| hint_width(key, label))
        .sum()
}

fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
    }
    spans
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        self.left_line().render(area, buf);

        if let Some(x) = self.footer_x(area) {
            let links: Vec<_> = FOOTER_LINKS
                .iter()
                .map(|(key, label, _)| (*key, *label))
                .collect();
            let right = Line::from(hint_spans(&links));
            right.render(Rect::new(x, area.y, footer_width(), 1), buf);
        }
    }
}
