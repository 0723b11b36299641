//! Colors for the navigation chrome, named by the role they play.
//!
//! The dark palette borrows Catppuccin Mocha values. Under `NO_COLOR` every
//! role falls back to the terminal's own colors and emphasis comes from
//! modifiers alone.

use ratatui::style::Color;

/// Role-based palette shared by the chrome widgets and the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Behind everything.
    pub canvas: Color,
    /// App bar strip in the drawer layout.
    pub bar: Color,
    /// Panel of the open drawer.
    pub drawer: Color,

    pub text: Color,
    /// Secondary labels: inactive tabs, subtitles, hint actions.
    pub label: Color,
    /// Separators and placeholder text.
    pub quiet: Color,

    /// The active destination in every presentation.
    pub active: Color,
    /// Screen content highlights.
    pub accent: Color,

    pub edge: Color,
    /// Edge of modal chrome (the open drawer).
    pub edge_modal: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark palette.
    pub fn dark() -> Self {
        let lavender = Color::Rgb(180, 190, 254);
        let surface1 = Color::Rgb(69, 71, 90);

        Self {
            canvas: Color::Rgb(30, 30, 46),
            bar: Color::Rgb(49, 50, 68),
            drawer: surface1,
            text: Color::Rgb(205, 214, 244),
            label: Color::Rgb(166, 173, 200),
            quiet: Color::Rgb(108, 112, 134),
            active: lavender,
            accent: Color::Rgb(148, 226, 213),
            edge: surface1,
            edge_modal: lavender,
        }
    }

    /// Terminal default colors for every role.
    pub fn plain() -> Self {
        Self {
            canvas: Color::Reset,
            bar: Color::Reset,
            drawer: Color::Reset,
            text: Color::Reset,
            label: Color::Reset,
            quiet: Color::Reset,
            active: Color::Reset,
            accent: Color::Reset,
            edge: Color::Reset,
            edge_modal: Color::Reset,
        }
    }

    /// [`Theme::plain`] when `NO_COLOR` is set, otherwise [`Theme::dark`].
    pub fn from_env() -> Self {
        Self::for_no_color(std::env::var_os("NO_COLOR").is_some())
    }

    fn for_no_color(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::dark()
        }
    }
}
