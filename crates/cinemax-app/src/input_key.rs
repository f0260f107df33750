//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that this crate, and its tests, never depend on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// True for Ctrl+C, which quits from every mode
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_quit_detection() {
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(!InputKey::Char('c').is_force_quit());
        assert!(!InputKey::CharCtrl('u').is_force_quit());
    }
}
