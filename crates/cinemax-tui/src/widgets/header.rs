//! Header bar with the brand and section tabs

use cinemax_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::theme::styles;

pub const BRAND: &str = "CineMax";

/// Columns before the brand glyph, and after the brand before the first tab
const LEAD: u16 = 1;
const BRAND_GAP: u16 = 3;
const TAB_GAP: u16 = 1;

fn tab_label(index: usize, section: Section) -> String {
    format!(" {} {} ", index + 1, section.label())
}

/// Brand on the left, numbered section tabs after it
pub struct MainHeader {
    section: Section,
}

impl MainHeader {
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, section) in Section::NAV.iter().enumerate() {
            let label = tab_label(i, *section);
            let style = if *section == self.section {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans
    }

    /// Clickable regions of the header line: the brand (as Home) and each tab.
    ///
    /// Regions past the right edge of `area` are dropped or clipped.
    pub fn tab_areas(area: Rect) -> Vec<(Rect, Section)> {
        let mut regions = Vec::new();
        if area.height == 0 || area.width == 0 {
            return regions;
        }
        let right = area.x + area.width;
        let mut push = |x: u16, width: u16, section: Section| {
            if x < right {
                let width = width.min(right - x);
                regions.push((Rect::new(x, area.y, width, 1), section));
            }
        };

        // "▶ " plus the brand
        let brand_width = 2 + BRAND.len() as u16;
        let mut x = area.x + LEAD;
        push(x, brand_width, Section::Home);
        x = x.saturating_add(brand_width + BRAND_GAP);

        for (i, section) in Section::NAV.iter().enumerate() {
            let width = tab_label(i, *section).len() as u16;
            push(x, width, *section);
            x = x.saturating_add(width + TAB_GAP);
        }
        regions
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" ".repeat(LEAD as usize)),
            Span::styled("▶ ", styles::accent()),
            Span::styled(BRAND, styles::accent_bold()),
            Span::raw(" ".repeat(BRAND_GAP as usize)),
        ];
        spans.extend(self.tab_spans());

        Line::from(spans).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;

    fn column_of(term: &TestTerminal, text: &str) -> u16 {
        let content = term.content();
        let first_line = content.lines().next().unwrap();
        let byte_pos = first_line.find(text).unwrap();
        first_line[..byte_pos].chars().count() as u16
    }

    #[test]
    fn test_header_shows_brand_and_tabs() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Section::Home), Rect::new(0, 0, 80, 2));

        assert!(term.line_contains(0, BRAND));
        assert!(term.line_contains(0, "1 Home"));
        assert!(term.line_contains(0, "4 Top Rated"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Section::Genres), Rect::new(0, 0, 80, 2));

        let genres = column_of(&term, "3 Genres");
        assert_eq!(term.buffer()[(genres, 0)].bg, palette::ACCENT);

        let home = column_of(&term, "1 Home");
        assert_ne!(term.buffer()[(home, 0)].bg, palette::ACCENT);
    }

    #[test]
    fn test_legal_section_highlights_no_tab() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Section::Legal), Rect::new(0, 0, 80, 2));

        for label in ["1 Home", "2 Discover", "3 Genres", "4 Top Rated"] {
            let x = column_of(&term, label);
            assert_ne!(term.buffer()[(x, 0)].bg, palette::ACCENT);
        }
    }

    #[test]
    fn test_tab_areas_line_up_with_labels() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 2);
        term.render_widget(MainHeader::new(Section::Home), area);
        let regions = MainHeader::tab_areas(area);

        assert_eq!(regions.len(), 5);
        assert_eq!(regions[0], (Rect::new(1, 0, 9, 1), Section::Home));
        assert_eq!(regions[0].0.x, column_of(&term, "▶"));
        for (label, (rect, _)) in ["1 Home", "2 Discover", "3 Genres", "4 Top Rated"]
            .iter()
            .zip(&regions[1..])
        {
            // Labels are padded with one space on each side
            assert_eq!(rect.x + 1, column_of(&term, label));
        }
        assert_eq!(regions[3].1, Section::Genres);
    }

    #[test]
    fn test_tab_areas_clip_to_width() {
        let regions = MainHeader::tab_areas(Rect::new(0, 0, 20, 2));
        assert!(regions.iter().all(|(rect, _)| rect.right() <= 20));
        assert!(regions.len() < 5);
    }
}
