//! Widget components for the CineMax TUI

pub mod detail_modal;
pub mod genre_panel;
pub mod header;
pub mod legal_page;
pub mod modal_overlay;
pub mod movie_list;
pub mod placeholder;
pub mod search_bar;
pub mod status_bar;
pub mod suggestion_list;

pub use detail_modal::DetailModal;
pub use genre_panel::GenrePanel;
pub use header::MainHeader;
pub use legal_page::LegalPageView;
pub use movie_list::{HeroCard, MovieList};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use suggestion_list::SuggestionList;
