//! Autocomplete dropdown under the search input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::modal_overlay;
use super::movie_list::scroll_offset;
use crate::theme::{palette, styles};

pub struct SuggestionList<'a> {
    items: &'a [String],
    highlighted: Option<usize>,
}

impl<'a> SuggestionList<'a> {
    pub fn new(items: &'a [String], highlighted: Option<usize>) -> Self {
        Self { items, highlighted }
    }

    /// Index of the first item drawn in `area`.
    ///
    /// The window slides so the highlighted item is always on screen.
    pub fn first_visible(area: Rect, count: usize, highlighted: Option<usize>) -> usize {
        let visible = Block::default().borders(Borders::ALL).inner(area).height as usize;
        highlighted
            .map(|h| scroll_offset(h, visible))
            .unwrap_or(0)
            .min(count.saturating_sub(visible))
    }

    /// One rect per row that fits inside `area`'s border
    pub fn row_areas(area: Rect, count: usize) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        (0..count.min(inner.height as usize))
            .map(|i| Rect::new(inner.x, inner.y + i as u16, inner.width, 1))
            .collect()
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(buf, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG));
        block.render(area, buf);

        let first = Self::first_visible(area, self.items.len(), self.highlighted);
        let rows = Self::row_areas(area, self.items.len() - first);
        for (row, i) in rows.into_iter().zip(first..) {
            let selected = self.highlighted == Some(i);
            let style = if selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            if selected {
                buf.set_style(row, style);
            }
            let marker = if selected { "▸ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(self.items[i].as_str(), style),
            ])
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn items() -> Vec<String> {
        vec!["Up".into(), "Up 2".into(), "Upgrade".into()]
    }

    #[test]
    fn test_row_areas_inside_border() {
        let rows = SuggestionList::row_areas(Rect::new(1, 5, 40, 5), 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Rect::new(2, 6, 38, 1));
        assert_eq!(rows[2].y, 8);
    }

    #[test]
    fn test_row_areas_clipped_to_height() {
        let rows = SuggestionList::row_areas(Rect::new(0, 0, 40, 4), 10);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_renders_every_item() {
        let items = items();
        let mut term = TestTerminal::new();
        term.render_widget(SuggestionList::new(&items, None), Rect::new(0, 0, 40, 5));
        assert!(term.line_contains(1, "Up"));
        assert!(term.line_contains(2, "Up 2"));
        assert!(term.line_contains(3, "Upgrade"));
    }

    #[test]
    fn test_highlighted_row_marked() {
        let items = items();
        let mut term = TestTerminal::new();
        term.render_widget(SuggestionList::new(&items, Some(1)), Rect::new(0, 0, 40, 5));
        assert!(term.line_contains(2, "▸ Up 2"));
        assert_eq!(term.buffer()[(10, 2)].bg, palette::ACCENT);
        assert_ne!(term.buffer()[(10, 1)].bg, palette::ACCENT);
    }

    #[test]
    fn test_window_follows_highlight() {
        let items: Vec<String> = (0..10).map(|i| format!("Movie{:02}", i)).collect();
        // Eight rows inside the border
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(SuggestionList::first_visible(area, items.len(), None), 0);
        assert_eq!(SuggestionList::first_visible(area, items.len(), Some(7)), 0);
        assert_eq!(SuggestionList::first_visible(area, items.len(), Some(9)), 2);

        let mut term = TestTerminal::new();
        term.render_widget(SuggestionList::new(&items, Some(9)), area);
        assert!(term.line_contains(8, "▸ Movie09"));
        assert!(term.line_contains(1, "Movie02"));
        assert!(!term.buffer_contains("Movie01"));
    }

    #[test]
    fn test_short_list_never_scrolls() {
        let items = items();
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(SuggestionList::first_visible(area, items.len(), Some(2)), 0);
    }
}
