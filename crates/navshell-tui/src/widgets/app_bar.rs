//! Top app bar for the compact layout.
//!
//! Format: `☰ Menu │ Posts                     [m] Menu │ [q] Quit`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::key_hints::{hint_line, KeyHint};
use crate::theme::{IconSet, Theme};

/// App bar with the drawer button, the active title, and hints.
pub struct AppBar<'a> {
    title: &'a str,
    hints: &'a [KeyHint],
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> AppBar<'a> {
    /// Create a new app bar widget.
    pub fn new(title: &'a str, hints: &'a [KeyHint], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            title,
            hints,
            theme,
            icons,
        }
    }
}

impl Widget for AppBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(self.icons.menu(), Style::default().fg(self.theme.active)),
            Span::styled(" Menu", Style::default().fg(self.theme.label)),
            Span::styled(" │ ", Style::default().fg(self.theme.quiet)),
            Span::styled(
                self.title,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        let hints = hint_line(self.hints, self.theme);
        let left_width: usize = spans.iter().map(Span::width).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + hints.width());
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.extend(hints.spans);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.bar))
            .render(area, buf);
    }
}
