//! Feed screen.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::heading;
use crate::theme::Theme;

struct Post {
    title: &'static str,
    author: &'static str,
    date: &'static str,
    likes: u32,
    body: &'static str,
}

const POSTS: [Post; 3] = [
    Post {
        title: "Quarterly planning kickoff",
        author: "Ana Souza",
        date: "02/09/2024",
        likes: 12,
        body: "Goals for the next quarter are up for review. Comments welcome until Friday.",
    },
    Post {
        title: "New onboarding guide",
        author: "Bruno Lima",
        date: "28/08/2024",
        likes: 8,
        body: "The onboarding guide now covers local setup and the release checklist.",
    },
    Post {
        title: "Design system update",
        author: "Carla Dias",
        date: "21/08/2024",
        likes: 21,
        body: "Buttons and badges picked up the new spacing tokens.",
    },
];

/// Render the feed.
pub fn render(theme: &Theme) -> Text<'static> {
    let mut lines = heading("Posts", "Latest updates from the team", theme);

    for post in &POSTS {
        lines.push(Line::from(Span::styled(
            post.title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(post.author, Style::default().fg(theme.accent)),
            Span::styled(
                format!(" · {} · {} likes", post.date, post.likes),
                Style::default().fg(theme.quiet),
            ),
        ]));
        lines.push(Line::from(Span::styled(post.body, Style::default().fg(theme.label))));
        lines.push(Line::default());
    }

    Text::from(lines)
}
