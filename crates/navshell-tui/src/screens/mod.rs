//! Demo content screens and the registry handed to the shell.
//!
//! Each screen renders a static [`Node`]; the directory screen adapts its
//! column count to the current [`SizeClass`].

pub mod members;
pub mod posts;
pub mod profile;

use std::cell::Cell;
use std::rc::Rc;

use navshell_core::{ScreenDescriptor, SizeClass};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::theme::{IconSet, Theme};
use crate::Node;

/// Screen ids in registry order.
pub const SCREEN_IDS: [&str; 3] = ["posts", "members", "profile"];

/// Build the screen registry.
///
/// `size` is read at render time so the directory screen tracks resizes.
pub fn registry(
    icons: IconSet,
    theme: &Theme,
    size: &Rc<Cell<SizeClass>>,
) -> Vec<ScreenDescriptor<Node>> {
    let posts_theme = theme.clone();
    let members_theme = theme.clone();
    let members_size = Rc::clone(size);
    let profile_theme = theme.clone();

    vec![
        ScreenDescriptor::new(
            SCREEN_IDS[0],
            "Posts",
            icon(icons.posts(), icons, theme),
            move || posts::render(&posts_theme),
        ),
        ScreenDescriptor::new(
            SCREEN_IDS[1],
            "Members",
            icon(icons.members(), icons, theme),
            move || members::render(&members_theme, members_size.get()),
        ),
        ScreenDescriptor::new(
            SCREEN_IDS[2],
            "Profile",
            icon(icons.profile(), icons, theme),
            move || profile::render(&profile_theme),
        ),
    ]
}

/// Icon renderer: highlighted with an indicator when active.
fn icon(glyph: &'static str, icons: IconSet, theme: &Theme) -> impl Fn(bool) -> Node + 'static {
    let active_style = Style::default()
        .fg(theme.active)
        .add_modifier(Modifier::BOLD);
    let idle_style = Style::default().fg(theme.quiet);
    move |active| {
        if active {
            Text::from(Line::from(vec![
                Span::styled(glyph, active_style),
                Span::styled(icons.active_indicator(), active_style),
            ]))
        } else {
            Text::from(Line::from(Span::styled(glyph, idle_style)))
        }
    }
}

/// Heading line shared by the screens.
fn heading(title: &'static str, subtitle: &'static str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(theme.label))),
        Line::default(),
    ]
}
