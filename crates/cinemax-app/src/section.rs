//! Section commands issued by the navigation shell
//!
//! Navigation never reaches into child components directly. The shell emits
//! `Message::Navigate(section)`, and the update function answers with one
//! of these commands, which resets the affected components through their
//! public methods.

use cinemax_core::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCommand {
    /// Clear search text, results, errors and genre selection; scroll to top
    ResetToHome,
    /// Focus the search input and bring it into view
    FocusSearch,
    /// Clear search results and errors, keep the genre selection; scroll to top
    ShowGenres,
    /// Clear search results, errors and genre selection; scroll to top
    ShowTopRated,
}

impl SectionCommand {
    /// Command issued when the user navigates to `section`
    pub fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Home => Some(SectionCommand::ResetToHome),
            Section::Discover => Some(SectionCommand::FocusSearch),
            Section::Genres => Some(SectionCommand::ShowGenres),
            Section::TopRated => Some(SectionCommand::ShowTopRated),
            Section::Legal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_section_has_a_command() {
        for section in Section::NAV {
            assert!(SectionCommand::for_section(section).is_some());
        }
        assert_eq!(SectionCommand::for_section(Section::Legal), None);
    }

    #[test]
    fn test_discover_focuses_search() {
        assert_eq!(
            SectionCommand::for_section(Section::Discover),
            Some(SectionCommand::FocusSearch)
        );
    }
}
