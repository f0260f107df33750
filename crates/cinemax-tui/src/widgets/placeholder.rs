//! Loading, empty and error states shared by the content views

use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::theme::styles;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Spinner frame for the current tick; advances every other tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick / 2) as usize % SPINNER.len()]
}

pub fn loading(label: &str, tick: u64) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(spinner_frame(tick), styles::accent()),
            Span::styled(format!(" {}…", label), styles::text_secondary()),
        ]),
    ])
    .centered()
}

pub fn empty(message: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(message.to_string(), styles::text_muted())),
    ])
    .centered()
    .wrap(Wrap { trim: true })
}

/// Inline, dismissible error banner
pub fn error_banner(message: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("✖ ", styles::error()),
            Span::styled(message.to_string(), styles::error()),
        ]),
        Line::from(vec![
            Span::styled("x", styles::keybinding()),
            Span::styled(" dismiss  ", styles::text_muted()),
            Span::styled("/", styles::keybinding()),
            Span::styled(" edit search", styles::text_muted()),
        ]),
    ])
    .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(1));
        assert_ne!(spinner_frame(0), spinner_frame(2));
        assert_eq!(spinner_frame(0), spinner_frame(8));
    }

    #[test]
    fn test_error_banner_text() {
        let mut term = TestTerminal::new();
        term.render_widget(
            error_banner("Movie 'Unknown Film' not found"),
            ratatui::layout::Rect::new(0, 0, 80, 2),
        );
        assert!(term.line_contains(0, "Movie 'Unknown Film' not found"));
        assert!(term.line_contains(1, "x dismiss"));
    }
}
