//! Section navigation and focus handlers

use cinemax_core::{LegalPage, Section};
use tracing::debug;

use crate::message::Message;
use crate::section::SectionCommand;
use crate::state::{AppState, Focus, GenrePane};

use super::{UpdateAction, UpdateResult};

pub fn handle_navigate(state: &mut AppState, section: Section) -> UpdateResult {
    debug!("Navigating to {}", section.label());
    state.section = section;
    state.legal_page = None;

    match SectionCommand::for_section(section) {
        Some(command) => UpdateResult::message(Message::Section(command)),
        None => UpdateResult::none(),
    }
}

pub fn handle_show_legal(state: &mut AppState, page: LegalPage) -> UpdateResult {
    debug!("Showing {}", page.title());
    state.section = Section::Legal;
    state.legal_page = Some(page);
    state.focus = Focus::Results;
    state.suggestions.close();
    state.page.scroll_to_top();
    UpdateResult::none()
}

/// Apply a section command to the screen components
pub fn handle_section_command(state: &mut AppState, command: SectionCommand) -> UpdateResult {
    match command {
        SectionCommand::ResetToHome => {
            state.search_input.clear();
            state.suggestions.reset();
            state.recommendations.clear();
            state.genres.clear_selection();
            state.page.genre_pane = GenrePane::Catalog;
            state.page.scroll_to_top();
            UpdateResult::action(UpdateAction::CancelSuggestions)
        }

        SectionCommand::FocusSearch => {
            state.focus = Focus::Search;
            state.suggestions.reopen();
            state.page.scroll_to_top();
            UpdateResult::none()
        }

        SectionCommand::ShowGenres => {
            state.recommendations.clear();
            state.page.scroll_to_top();
            UpdateResult::message(Message::LoadGenreCatalog)
        }

        SectionCommand::ShowTopRated => {
            state.recommendations.clear();
            state.genres.clear_selection();
            state.page.genre_pane = GenrePane::Catalog;
            state.page.scroll_to_top();
            UpdateResult::none()
        }
    }
}

pub fn handle_focus_search(state: &mut AppState) -> UpdateResult {
    state.focus = Focus::Search;
    state.suggestions.reopen();
    UpdateResult::none()
}

pub fn handle_focus_results(state: &mut AppState) -> UpdateResult {
    state.focus = Focus::Results;
    state.suggestions.close();
    UpdateResult::none()
}
