//! Terminal setup and restoration

use std::io::stdout;

use cinemax_core::prelude::*;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start receiving mouse clicks and wheel events
pub fn enable_mouse() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to disable mouse capture: {}", e)))
}
