//! Key event handlers for each focus mode

use cinemax_core::{LegalPage, Section};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ContentView, Focus};

/// Convert key events to messages based on overlay and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    if state.detail.is_open() {
        return handle_key_detail(key);
    }

    match state.focus {
        Focus::Search => handle_key_search(state, key),
        Focus::Results => handle_key_results(state, key),
    }
}

/// Handle key events while the detail overlay is open
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q' | 'x') | InputKey::Backspace => {
            Some(Message::CloseDetail)
        }
        InputKey::Char('j') | InputKey::Down | InputKey::PageDown => {
            Some(Message::DetailScrollDown)
        }
        InputKey::Char('k') | InputKey::Up | InputKey::PageUp => Some(Message::DetailScrollUp),
        _ => None,
    }
}

/// Handle key events while typing in the search input
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Type character
        InputKey::Char(c) => {
            let mut text = state.search_input.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        // Delete character
        InputKey::Backspace => {
            let mut text = state.search_input.clone();
            text.pop()?;
            Some(Message::SearchInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Down => {
            if state.suggestions.is_open() {
                Some(Message::HighlightNextSuggestion)
            } else {
                Some(Message::FocusResults)
            }
        }
        InputKey::Up => Some(Message::HighlightPrevSuggestion),

        // Accept the highlighted suggestion, or search for the raw text
        InputKey::Enter => {
            if state.suggestions.is_open() && state.suggestions.highlighted_item().is_some() {
                Some(Message::AcceptSuggestion)
            } else {
                Some(Message::SubmitSearch)
            }
        }

        InputKey::Esc => {
            if state.suggestions.is_open() {
                Some(Message::CloseSuggestions)
            } else {
                Some(Message::FocusResults)
            }
        }

        InputKey::Tab | InputKey::BackTab => Some(Message::FocusResults),

        _ => None,
    }
}

/// Handle key events while browsing the content area
fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Section::NAV.get(index).copied().map(Message::Navigate)
        }
        InputKey::Char('A') => Some(Message::ShowLegal(LegalPage::About)),
        InputKey::Char('P') => Some(Message::ShowLegal(LegalPage::Privacy)),
        InputKey::Char('T') => Some(Message::ShowLegal(LegalPage::Terms)),
        InputKey::Char('C') => Some(Message::ShowLegal(LegalPage::Contact)),

        InputKey::Char('/') | InputKey::Tab | InputKey::BackTab => Some(Message::FocusSearch),

        // ─────────────────────────────────────────────────────────
        // Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorTop),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // ─────────────────────────────────────────────────────────
        // Item Actions
        // ─────────────────────────────────────────────────────────
        InputKey::Enter => {
            if let Some(name) = state.highlighted_genre() {
                return Some(Message::ToggleGenre {
                    name: name.to_string(),
                });
            }
            state.selected_movie().map(|movie| Message::OpenDetail {
                movie_id: movie.id,
            })
        }
        InputKey::Char('s') => state.selected_movie().map(|movie| Message::FindSimilar {
            title: movie.title.clone(),
        }),

        InputKey::Char('b') | InputKey::Backspace => handle_back(state),

        InputKey::Char('x') => state
            .recommendations
            .error()
            .map(|_| Message::DismissError),

        InputKey::Char('h' | 'l') | InputKey::Left | InputKey::Right => {
            if state.content_view() == ContentView::Genres {
                Some(Message::SwitchGenrePane)
            } else {
                None
            }
        }

        _ => None,
    }
}

/// Leave a legal page or clear the search results
fn handle_back(state: &AppState) -> Option<Message> {
    if state.legal_page.is_some() {
        return Some(Message::Navigate(Section::Home));
    }
    if !state.recommendations.is_idle() {
        return Some(Message::ClearSearch);
    }
    None
}
