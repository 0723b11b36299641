//! Team directory screen.
//!
//! Cards are laid out in one, two or three columns depending on the
//! viewport's size class.

use navshell_core::SizeClass;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::heading;
use crate::theme::Theme;

const CARD_WIDTH: usize = 24;

const MEMBERS: [(&str, &str, &str); 6] = [
    ("Ana Souza", "Engineering Lead", "Technology"),
    ("Bruno Lima", "Backend Developer", "Technology"),
    ("Carla Dias", "Product Designer", "Design"),
    ("Diego Alves", "Growth Analyst", "Marketing"),
    ("Elisa Rocha", "Account Manager", "Sales"),
    ("Felipe Nunes", "SRE", "Infrastructure"),
];

/// Number of card columns for a size class.
pub fn columns(size: SizeClass) -> usize {
    match size {
        SizeClass::Mobile => 1,
        SizeClass::Tablet => 2,
        SizeClass::Desktop => 3,
    }
}

/// Render the directory.
pub fn render(theme: &Theme, size: SizeClass) -> Text<'static> {
    let departments = {
        let mut seen: Vec<&str> = MEMBERS.iter().map(|(_, _, dept)| *dept).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    };
    let mut lines = heading("Members", "Meet the team", theme);
    lines.insert(
        2,
        Line::from(Span::styled(
            format!("{} members · {departments} departments", MEMBERS.len()),
            Style::default().fg(theme.quiet),
        )),
    );

    let name_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let role_style = Style::default().fg(theme.label);
    let dept_style = Style::default().fg(theme.accent);

    for row in MEMBERS.chunks(columns(size)) {
        let mut names = Vec::new();
        let mut roles = Vec::new();
        let mut depts = Vec::new();
        for (name, role, dept) in row {
            names.push(Span::styled(format!("{name:<CARD_WIDTH$}"), name_style));
            roles.push(Span::styled(format!("{role:<CARD_WIDTH$}"), role_style));
            depts.push(Span::styled(format!("{dept:<CARD_WIDTH$}"), dept_style));
        }
        lines.push(Line::from(names));
        lines.push(Line::from(roles));
        lines.push(Line::from(depts));
        lines.push(Line::default());
    }

    Text::from(lines)
}
