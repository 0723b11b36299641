//! Keybinding hints shown in the chrome.
//!
//! Format: `[m] Menu │ [1-3] Switch │ [q] Quit`

use navshell_core::LayoutClass;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Esc").
    pub key: String,
    /// The action description (e.g., "Menu", "Quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the current layout and drawer state.
#[must_use]
pub fn hints_for_layout(layout: LayoutClass, drawer_open: bool) -> Vec<KeyHint> {
    if drawer_open {
        return vec![
            KeyHint::new("j/k", "Move"),
            KeyHint::new("Enter", "Open"),
            KeyHint::new("Esc", "Close"),
        ];
    }

    let mut hints = Vec::new();
    if layout.has_drawer() {
        hints.push(KeyHint::new("m", "Menu"));
    }
    hints.push(KeyHint::new("Tab", "Next"));
    hints.push(KeyHint::new("q", "Quit"));
    hints
}

/// Render hints as a single styled line.
pub fn hint_line<'a>(hints: &'a [KeyHint], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.quiet)));
        }
        spans.push(Span::styled("[", Style::default().fg(theme.quiet)));
        spans.push(Span::styled(hint.key.as_str(), Style::default().fg(theme.active)));
        spans.push(Span::styled("] ", Style::default().fg(theme.quiet)));
        spans.push(Span::styled(hint.action.as_str(), Style::default().fg(theme.label)));
    }
    Line::from(spans)
}
