//! Vertical navigation list used by the fixed sidebar and the drawer.

use navshell_core::NavItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::key_hints::{hint_line, KeyHint};
use crate::theme::{BorderSet, IconSet, Theme};
use crate::Node;

/// Width of the sidebar including borders.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Navigation list with one row per screen.
pub struct Sidebar<'a> {
    items: &'a [NavItem<Node>],
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    hints: &'a [KeyHint],
    cursor: Option<usize>,
    modal: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(
        items: &'a [NavItem<Node>],
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            items,
            theme,
            icons,
            borders,
            hints: &[],
            cursor: None,
            modal: false,
        }
    }

    /// Highlight a row as the keyboard cursor.
    #[must_use]
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Draw with the modal border set (drawer).
    #[must_use]
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    /// Hints shown on the bottom border.
    #[must_use]
    pub fn hints(mut self, hints: &'a [KeyHint]) -> Self {
        self.hints = hints;
        self
    }

    fn row(&self, item: &'a NavItem<Node>) -> Line<'a> {
        let marker = self.icons.active_marker();
        let (marker, style) = if item.active {
            (
                marker.to_string(),
                Style::default()
                    .fg(self.theme.active)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                " ".repeat(marker.chars().count()),
                Style::default().fg(self.theme.text),
            )
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(self.theme.active)),
            Span::raw(" "),
        ];
        if let Some(icon) = item.icon.lines.first() {
            spans.extend(icon.spans.iter().cloned());
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item.title.as_str(), style));
        Line::from(spans)
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (set, border_color) = if self.modal {
            (self.borders.modal(), self.theme.edge_modal)
        } else {
            (self.borders.normal(), self.theme.edge)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(set)
            .border_style(Style::default().fg(border_color))
            .title(" navshell ")
            .title_style(Style::default().fg(self.theme.active));
        if self.modal {
            block = block.style(Style::default().bg(self.theme.drawer));
        }
        if !self.hints.is_empty() {
            block = block.title_bottom(hint_line(self.hints, self.theme));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        for (offset, (index, item)) in (0..inner.height).zip(self.items.iter().enumerate()) {
            let row = Rect::new(inner.x, inner.y + offset, inner.width, 1);
            buf.set_line(row.x, row.y, &self.row(item), row.width);
            if self.cursor == Some(index) {
                buf.set_style(row, Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}
