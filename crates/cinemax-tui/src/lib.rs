//! cinemax-tui - Terminal UI for CineMax
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from cinemax-app backed by the HTTP movie service and adds terminal
//! rendering, keyboard and mouse polling, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
