//! Shell layout for the three presentations.
//!
//! - `FixedSidebar`: Sidebar | Content
//! - `DrawerWithTabBar`: App bar / Content / Tab bar, drawer over a dimmed backdrop
//! - `TabBarOnly`: Content / Tab bar

use navshell_core::{NavItem, Presentation};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};

use crate::{
    theme::{BorderSet, IconSet, Theme},
    widgets::{
        hints_for_layout, AppBar, Pane, Sidebar, TabBar, SIDEBAR_WIDTH, TAB_BAR_HEIGHT,
    },
    Node,
};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 20;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 8;
/// Maximum drawer width; narrower terminals get a drawer two columns short of full width.
pub const DRAWER_WIDTH: u16 = SIDEBAR_WIDTH;

/// Styling shared by the chrome.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub theme: &'a Theme,
    pub icons: &'a IconSet,
    pub borders: &'a BorderSet,
    /// Highlighted drawer row.
    pub drawer_cursor: usize,
}

/// Render a composed presentation into `area`.
pub fn render_presentation(
    presentation: &Presentation<Node>,
    chrome: &Chrome<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(chrome, area, buf);
        return;
    }

    let hints = hints_for_layout(presentation.layout(), presentation.drawer_open());
    let title = active_title(presentation.items());

    match presentation {
        Presentation::FixedSidebar { items, content } => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(area);

            Sidebar::new(items, chrome.theme, chrome.icons, chrome.borders)
                .hints(&hints)
                .render(chunks[0], buf);
            render_content(content, title, chrome, chunks[1], buf);
        }
        Presentation::DrawerWithTabBar {
            items,
            drawer_open,
            content,
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(TAB_BAR_HEIGHT),
                ])
                .split(area);

            AppBar::new(title, &hints, chrome.theme, chrome.icons).render(chunks[0], buf);
            render_content(content, title, chrome, chunks[1], buf);
            TabBar::new(items, chrome.theme, chrome.borders).render(chunks[2], buf);

            if *drawer_open {
                render_drawer(items, chrome, area, buf);
            }
        }
        Presentation::TabBarOnly { items, content } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(TAB_BAR_HEIGHT)])
                .split(area);

            render_content(content, title, chrome, chunks[0], buf);
            TabBar::new(items, chrome.theme, chrome.borders).render(chunks[1], buf);
        }
    }
}

fn active_title(items: &[NavItem<Node>]) -> &str {
    items
        .iter()
        .find(|item| item.active)
        .map_or("", |item| item.title.as_str())
}

fn render_content(content: &Node, title: &str, chrome: &Chrome<'_>, area: Rect, buf: &mut Buffer) {
    Pane::new(chrome.theme, chrome.borders)
        .title(title)
        .content(content)
        .render(area, buf);
}

/// Modal drawer: dim everything, then draw the list on the left edge.
fn render_drawer(
    items: &[NavItem<Node>],
    chrome: &Chrome<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

    let width = DRAWER_WIDTH.min(area.width.saturating_sub(2));
    let panel = Rect::new(area.x, area.y, width, area.height);
    Clear.render(panel, buf);
    Sidebar::new(items, chrome.theme, chrome.icons, chrome.borders)
        .cursor(Some(chrome.drawer_cursor))
        .modal(true)
        .render(panel, buf);
}

fn render_too_small(chrome: &Chrome<'_>, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Paragraph::new(vec![
        Line::from("Terminal too small"),
        Line::from(format!("Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}")),
    ])
    .style(Style::default().fg(chrome.theme.label))
    .render(area, buf);
}
