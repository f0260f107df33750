//! Search input box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::placeholder::spinner_frame;
use crate::theme::styles;

pub const PLACEHOLDER: &str = "Type a movie you love, e.g. Inception";

/// Bordered single-line input for the recommendation search
pub struct SearchBar<'a> {
    text: &'a str,
    focused: bool,
    pending: bool,
    tick: u64,
}

impl<'a> SearchBar<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self {
            text,
            focused,
            pending: false,
            tick: 0,
        }
    }

    /// Show a spinner while suggestions are on their way
    pub fn pending(mut self, pending: bool, tick: u64) -> Self {
        self.pending = pending;
        self.tick = tick;
        self
    }
}

/// Longest suffix of `text` that fits in `width` columns.
///
/// The cursor sits at the end of the input, so the start is what gets cut.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            " Search ",
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        // Prompt, cursor and spinner columns
        let reserved = 2 + 1 + if self.pending { 2 } else { 0 };
        let available = (inner.width as usize).saturating_sub(reserved);

        let mut spans = vec![Span::styled("› ", styles::accent())];
        if self.text.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(
                visible_tail(self.text, available),
                styles::text_primary(),
            ));
            if self.focused {
                spans.push(Span::styled("_", styles::accent()));
            }
            if self.text.is_empty() {
                spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            }
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if self.pending {
            let x = inner.x + inner.width - 2;
            buf.set_string(x, inner.y, spinner_frame(self.tick), styles::text_muted());
        }
    }
}
