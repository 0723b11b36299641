//! Content pane with border and optional title.
//!
//! Hosts the active screen's rendered node.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{BorderSet, Theme};

/// Bordered pane around a screen's content.
pub struct Pane<'a> {
    title: Option<&'a str>,
    content: Option<&'a Text<'static>>,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane widget.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            content: None,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the pane content.
    #[must_use]
    pub fn content(mut self, content: &'a Text<'static>) -> Self {
        self.content = Some(content);
        self
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.edge));

        if let Some(title) = self.title {
            block = block
                .title(format!(" {title} "))
                .title_style(Style::default().fg(self.theme.active));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(text) = self.content {
            Paragraph::new(text.clone())
                .style(Style::default().fg(self.theme.text))
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }
    }
}
