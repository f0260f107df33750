//! Static text for the About / Privacy / Terms / Contact pages

use crate::types::LegalPage;

/// One titled block of text on a legal page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Full content of a legal page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalContent {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [LegalSection],
}

const ABOUT: LegalContent = LegalContent {
    title: "About CineMax",
    intro: "CineMax helps you find your next favourite film. Type a movie you love and \
            we suggest titles with a similar feel, or browse by genre and rating.",
    sections: &[
        LegalSection {
            heading: "How it works",
            body: "Recommendations are computed by the CineMax service from genres, \
                   keywords, cast and crew. This client only displays what the service returns.",
        },
        LegalSection {
            heading: "Data",
            body: "Movie data and artwork come from The Movie Database (TMDB). \
                   CineMax is not endorsed or certified by TMDB.",
        },
    ],
};

const PRIVACY: LegalContent = LegalContent {
    title: "Privacy Policy",
    intro: "CineMax does not create accounts and does not store personal information.",
    sections: &[
        LegalSection {
            heading: "What we send",
            body: "Search text and the ids of movies you open are sent to the configured \
                   CineMax service to answer your request. Nothing else leaves your machine.",
        },
        LegalSection {
            heading: "Logs",
            body: "Diagnostic logs are written to your local data directory and are \
                   never uploaded.",
        },
        LegalSection {
            heading: "Third parties",
            body: "Movie metadata is provided by TMDB. See TMDB's privacy policy for \
                   their data practices.",
        },
    ],
};

const TERMS: LegalContent = LegalContent {
    title: "Terms of Service",
    intro: "By using CineMax you agree to these terms.",
    sections: &[
        LegalSection {
            heading: "Use of the service",
            body: "CineMax is provided for personal, non-commercial movie discovery.",
        },
        LegalSection {
            heading: "No warranty",
            body: "Recommendations and movie details are provided as-is. We make no \
                   guarantee of accuracy or availability.",
        },
        LegalSection {
            heading: "Content",
            body: "Movie data and images are subject to TMDB's terms of use.",
        },
        LegalSection {
            heading: "Changes",
            body: "These terms may change at any time. Continued use means you accept \
                   the updated terms.",
        },
    ],
};

const CONTACT: LegalContent = LegalContent {
    title: "Contact Us",
    intro: "Questions, feedback or found a bug? We would love to hear from you.",
    sections: &[
        LegalSection {
            heading: "Email",
            body: "support@cinemax.app",
        },
        LegalSection {
            heading: "Feedback",
            body: "Suggestions for better recommendations are always welcome.",
        },
    ],
};

impl LegalPage {
    pub fn content(&self) -> &'static LegalContent {
        match self {
            LegalPage::About => &ABOUT,
            LegalPage::Privacy => &PRIVACY,
            LegalPage::Terms => &TERMS,
            LegalPage::Contact => &CONTACT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_content() {
        for page in LegalPage::ALL {
            let content = page.content();
            assert!(!content.title.is_empty());
            assert!(!content.sections.is_empty());
        }
    }
}
