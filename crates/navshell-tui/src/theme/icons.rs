//! Navigation icons for Nerd Fonts, Unicode, and ASCII fallback.

use navshell_core::IconStyle;

/// Icon set based on configured style.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    style: IconStyle,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified style.
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    // === Screen Icons ===

    pub fn posts(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰈙",
            IconStyle::Unicode => "▤",
            IconStyle::Ascii => "[=]",
        }
    }

    pub fn members(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰡉",
            IconStyle::Unicode => "☷",
            IconStyle::Ascii => "[@]",
        }
    }

    pub fn profile(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰀄",
            IconStyle::Unicode => "☺",
            IconStyle::Ascii => "[o]",
        }
    }

    // === Chrome Icons ===

    /// Hamburger button that opens the drawer.
    pub fn menu(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰍜",
            IconStyle::Unicode => "☰",
            IconStyle::Ascii => "=",
        }
    }

    /// Dot shown next to the active tab's icon.
    pub fn active_indicator(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "•",
            IconStyle::Ascii => "*",
        }
    }

    /// Bar marking the active sidebar entry.
    pub fn active_marker(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "▌",
            IconStyle::Ascii => ">",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(IconSet::default().posts(), IconSet::new(IconStyle::Unicode).posts());
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconStyle::Ascii);
        for icon in [
            icons.posts(),
            icons.members(),
            icons.profile(),
            icons.menu(),
            icons.active_indicator(),
            icons.active_marker(),
        ] {
            assert!(icon.is_ascii(), "{icon} is not ASCII");
        }
    }

    #[test]
    fn test_screen_icons_are_distinct() {
        for style in [IconStyle::Nerd, IconStyle::Unicode, IconStyle::Ascii] {
            let icons = IconSet::new(style);
            assert_ne!(icons.posts(), icons.members());
            assert_ne!(icons.members(), icons.profile());
        }
    }
}
