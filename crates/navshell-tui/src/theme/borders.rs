//! Border sets for Unicode and ASCII fallback.

use navshell_core::IconStyle;
use ratatui::symbols::border;

/// Border set based on icon style (supports `NO_COLOR`/ASCII fallback).
#[derive(Debug, Clone, Copy)]
pub struct BorderSet {
    style: IconStyle,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified style.
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    /// Borders for panes and the fixed sidebar - rounded for Unicode, plain for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => border::ROUNDED,
            IconStyle::Ascii => border::PLAIN,
        }
    }

    /// Borders for the modal drawer - thick for Unicode, double for ASCII.
    pub fn modal(&self) -> border::Set {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => border::THICK,
            IconStyle::Ascii => border::DOUBLE,
        }
    }
}
