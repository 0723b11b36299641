//! Bottom tab bar widget.
//!
//! One equal-width segment per screen: icon on the first row, label on the
//! second, both centered. The active segment's label is highlighted.

use navshell_core::NavItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{BorderSet, Theme};
use crate::Node;

/// Height of the tab bar including its top border.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Bottom navigation bar.
pub struct TabBar<'a> {
    items: &'a [NavItem<Node>],
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> TabBar<'a> {
    /// Create a new tab bar widget.
    pub fn new(items: &'a [NavItem<Node>], theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            items,
            theme,
            borders,
        }
    }

    fn render_tab(&self, item: &NavItem<Node>, area: Rect, buf: &mut Buffer) {
        if let Some(icon) = item.icon.lines.first() {
            let pad = area.width.saturating_sub(line_width(icon)) / 2;
            buf.set_line(area.x + pad, area.y, icon, area.width - pad);
        }

        if area.height < 2 {
            return;
        }
        let label_style = if item.active {
            Style::default()
                .fg(self.theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.label)
        };
        let width = u16::try_from(item.title.width()).unwrap_or(u16::MAX);
        let pad = area.width.saturating_sub(width) / 2;
        buf.set_stringn(
            area.x + pad,
            area.y + 1,
            &item.title,
            usize::from(area.width - pad),
            label_style,
        );
    }
}

fn line_width(line: &ratatui::text::Line<'_>) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.edge));
        let inner = block.inner(area);
        block.render(area, buf);

        let Ok(count) = u16::try_from(self.items.len()) else {
            return;
        };
        if inner.height == 0 || count == 0 {
            return;
        }
        let segment = inner.width / count;
        if segment == 0 {
            return;
        }

        for (index, item) in (0..count).zip(self.items) {
            let x = inner.x + index * segment;
            let width = if index + 1 == count {
                inner.width - index * segment
            } else {
                segment
            };
            self.render_tab(item, Rect::new(x, inner.y, width, inner.height), buf);
        }
    }
}
