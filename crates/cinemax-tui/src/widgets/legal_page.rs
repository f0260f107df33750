//! Static About / Privacy / Terms / Contact pages

use cinemax_core::LegalPage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct LegalPageView {
    page: LegalPage,
    focused: bool,
}

impl LegalPageView {
    pub fn new(page: LegalPage) -> Self {
        Self {
            page,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LegalPageView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = self.page.content();
        let block = styles::glass_block(self.focused)
            .title(Span::styled(format!(" {} ", self.page.title()), styles::accent_bold()))
            .title_bottom(Line::from(vec![
                Span::styled(" b", styles::keybinding()),
                Span::styled(" back ", styles::text_muted()),
            ]));

        let mut lines = vec![
            Line::from(Span::styled(content.title, styles::text_bright_bold())),
            Line::default(),
            Line::from(Span::styled(content.intro, styles::text_primary())),
        ];
        for section in content.sections {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(section.heading, styles::accent_bold())));
            lines.push(Line::from(Span::styled(section.body, styles::text_secondary())));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
