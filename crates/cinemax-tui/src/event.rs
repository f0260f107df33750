//! Terminal event polling

use cinemax_app::message::Message;
use cinemax_app::InputKey;
use cinemax_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;

use crate::layout::HitAreas;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event into a message using the areas of the last frame.
///
/// Wheel events scroll the overlay when it is open and move the list
/// cursor otherwise; the update function ignores whichever does not apply.
pub fn mouse_event_to_message(mouse: MouseEvent, hits: &HitAreas) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(Message::Click(hits.resolve(mouse.column, mouse.row)))
        }
        MouseEventKind::ScrollDown if hits.detail_panel.is_some() => {
            Some(Message::DetailScrollDown)
        }
        MouseEventKind::ScrollUp if hits.detail_panel.is_some() => Some(Message::DetailScrollUp),
        MouseEventKind::ScrollDown => Some(Message::CursorDown),
        MouseEventKind::ScrollUp => Some(Message::CursorUp),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(hits: &HitAreas) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_message(mouse, hits)),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinemax_app::ClickTarget;
    use crossterm::event::KeyEvent;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn search_hits() -> HitAreas {
        HitAreas {
            search_input: Rect::new(0, 3, 80, 3),
            suggestion_rows: vec![Rect::new(1, 6, 40, 1), Rect::new(1, 7, 40, 1)],
            ..HitAreas::default()
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputKey::Down)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(InputKey::PageDown)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_uppercase_letters() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('A')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_left_click_on_suggestion_row() {
        let msg = mouse_event_to_message(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 7),
            &search_hits(),
        );
        assert!(matches!(
            msg,
            Some(Message::Click(ClickTarget::Suggestion(1)))
        ));
    }

    #[test]
    fn test_left_click_outside_everything() {
        let msg = mouse_event_to_message(
            mouse(MouseEventKind::Down(MouseButton::Left), 70, 20),
            &search_hits(),
        );
        assert!(matches!(msg, Some(Message::Click(ClickTarget::Elsewhere))));
    }

    #[test]
    fn test_wheel_scrolls_detail_when_open() {
        let hits = HitAreas {
            detail_panel: Some(Rect::new(10, 2, 60, 20)),
            ..HitAreas::default()
        };
        let msg = mouse_event_to_message(mouse(MouseEventKind::ScrollDown, 0, 0), &hits);
        assert!(matches!(msg, Some(Message::DetailScrollDown)));

        let msg = mouse_event_to_message(mouse(MouseEventKind::ScrollDown, 0, 0), &search_hits());
        assert!(matches!(msg, Some(Message::CursorDown)));
    }

    #[test]
    fn test_mouse_move_ignored() {
        let msg = mouse_event_to_message(mouse(MouseEventKind::Moved, 5, 7), &search_hits());
        assert!(msg.is_none());
    }
}
