//! Shared overlay utilities for the detail modal and the suggestion dropdown.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a percentage-based rect within an area.
///
/// `width_percent` and `height_percent` should be 0-100. The result is never
/// narrower than `min_width` (or the area, whichever is smaller).
pub fn centered_rect_percent(
    width_percent: u16,
    height_percent: u16,
    min_width: u16,
    area: Rect,
) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);
    let row = vertical[1];

    let width = (row.width * width_percent / 100).max(min_width).min(row.width);
    let x = row.x + (row.width - width) / 2;
    Rect::new(x, row.y, width, row.height)
}

/// Dim all cells in the given area.
///
/// Stands in for the blurred backdrop behind the detail modal.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    // Right edge
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset cells so overlay content does not mix with what is underneath
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_percent() {
        let area = Rect::new(0, 0, 100, 50);
        let result = centered_rect_percent(80, 80, 0, area);
        assert_eq!(result.width, 80);
        assert_eq!(result.x, 10);
        assert!(result.height >= 38 && result.height <= 42); // ~80%
    }

    #[test]
    fn test_centered_rect_percent_respects_min_width() {
        let area = Rect::new(0, 0, 50, 20);
        let result = centered_rect_percent(50, 80, 40, area);
        assert_eq!(result.width, 40);
        assert_eq!(result.x, 5);

        // Never wider than the area
        let narrow = centered_rect_percent(50, 80, 40, Rect::new(0, 0, 30, 20));
        assert_eq!(narrow.width, 30);
    }

    #[test]
    fn test_dim_background_offset_area() {
        let area = Rect::new(5, 3, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, area);
        for y in 3..8 {
            for x in 5..15 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, palette::TEXT_MUTED);
                assert_eq!(cell.bg, palette::DEEPEST_BG);
            }
        }
    }

    #[test]
    fn test_render_shadow_offset() {
        let area = Rect::new(0, 0, 20, 10);
        let modal = Rect::new(5, 2, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal);

        let right_shadow = &buf[(15, 3)];
        assert_eq!(right_shadow.bg, palette::SHADOW);
        assert_eq!(right_shadow.symbol(), " ");

        let bottom_shadow = &buf[(6, 8)];
        assert_eq!(bottom_shadow.bg, palette::SHADOW);
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let area = Rect::new(0, 0, 10, 10);
        let modal = Rect::new(8, 8, 2, 2);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal);
    }
}
