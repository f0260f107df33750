//! Screen layout definitions and mouse hit areas

use cinemax_app::ClickTarget;
use cinemax_core::{LegalPage, Section};
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Minimum terminal width for the full status bar hints
pub const MIN_FULL_STATUS_WIDTH: u16 = 70;

/// Most suggestion rows shown in the dropdown
pub const MAX_SUGGESTION_ROWS: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header (brand + tabs, bottom border)
        Constraint::Length(3), // Search input
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Check if we should use compact status bar
pub fn use_compact_status(area: Rect) -> bool {
    area.width < MIN_FULL_STATUS_WIDTH
}

/// Dropdown directly below the search input, overlapping the content.
///
/// Height includes the border; `None` when there is nothing to show or
/// no room below the input.
pub fn suggestion_dropdown(search: Rect, content: Rect, rows: usize) -> Option<Rect> {
    if rows == 0 {
        return None;
    }
    let rows = (rows as u16).min(MAX_SUGGESTION_ROWS);
    let height = (rows + 2).min(content.height);
    if height < 3 {
        return None;
    }
    let x = search.x + 1;
    let width = search.width.saturating_sub(2);
    Some(Rect::new(x, search.y + search.height, width, height))
}

/// Clickable regions of the last rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub search_input: Rect,
    /// One rect per visible suggestion row, in list order
    pub suggestion_rows: Vec<Rect>,
    /// Index of the suggestion drawn in the first row
    pub suggestion_offset: usize,
    /// Set while the detail overlay is open
    pub detail_panel: Option<Rect>,
    /// Brand and section tabs in the header
    pub nav_tabs: Vec<(Rect, Section)>,
    /// Legal links in the status bar
    pub footer_links: Vec<(Rect, LegalPage)>,
}

impl HitAreas {
    /// Map a click position to what was under it.
    ///
    /// While the overlay is open only the panel and the backdrop exist.
    pub fn resolve(&self, column: u16, row: u16) -> ClickTarget {
        let pos = Position::new(column, row);

        if let Some(panel) = self.detail_panel {
            return if panel.contains(pos) {
                ClickTarget::DetailPanel
            } else {
                ClickTarget::Backdrop
            };
        }

        if let Some(index) = self.suggestion_rows.iter().position(|r| r.contains(pos)) {
            return ClickTarget::Suggestion(self.suggestion_offset + index);
        }
        if self.search_input.contains(pos) {
            return ClickTarget::SearchInput;
        }
        if let Some((_, section)) = self.nav_tabs.iter().find(|(r, _)| r.contains(pos)) {
            return ClickTarget::Nav(*section);
        }
        if let Some((_, page)) = self.footer_links.iter().find(|(r, _)| r.contains(pos)) {
            return ClickTarget::Legal(*page);
        }
        ClickTarget::Elsewhere
    }
}
