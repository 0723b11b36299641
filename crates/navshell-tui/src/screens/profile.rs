//! Profile screen.

use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use super::heading;
use crate::theme::Theme;

const FIELDS: [(&str, &str); 4] = [
    ("Name", "Ana Souza"),
    ("Role", "Engineering Lead"),
    ("Department", "Technology"),
    ("Email", "ana.souza@example.com"),
];

/// Render the profile view.
pub fn render(theme: &Theme) -> Text<'static> {
    let mut lines = heading("Profile", "Your account", theme);
    lines.extend(FIELDS.iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(theme.quiet)),
            Span::styled(*value, Style::default().fg(theme.text)),
        ])
    }));
    Text::from(lines)
}
