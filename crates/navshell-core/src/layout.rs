//! Layout selection.
//!
//! | platform | breakpoint | layout              |
//! |----------|------------|---------------------|
//! | web      | regular    | fixed sidebar       |
//! | web      | compact    | drawer + tab bar    |
//! | native   | compact    | drawer + tab bar    |
//! | native   | regular    | tab bar only        |
//!
//! [`select`] is the only place a layout is decided. The sidebar is a web
//! affordance, so large native screens keep the bottom bar.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::breakpoint::{self, BreakpointClass};
use crate::error::ConfigurationError;
use crate::viewport::{PlatformKind, ViewportSample};

/// The three navigation presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutClass {
    /// Permanent sidebar next to the content.
    FixedSidebar,
    /// Collapsible drawer plus bottom tab bar.
    DrawerWithTabBar,
    /// Bottom tab bar only.
    TabBarOnly,
}

impl LayoutClass {
    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FixedSidebar => "fixed_sidebar",
            Self::DrawerWithTabBar => "drawer_with_tab_bar",
            Self::TabBarOnly => "tab_bar_only",
        }
    }

    /// Whether this presentation has a drawer that can open.
    pub fn has_drawer(self) -> bool {
        self == Self::DrawerWithTabBar
    }

    /// Whether this presentation shows a bottom tab bar.
    pub fn has_tab_bar(self) -> bool {
        matches!(self, Self::DrawerWithTabBar | Self::TabBarOnly)
    }
}

impl std::fmt::Display for LayoutClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutClass {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed_sidebar" => Ok(Self::FixedSidebar),
            "drawer_with_tab_bar" => Ok(Self::DrawerWithTabBar),
            "tab_bar_only" => Ok(Self::TabBarOnly),
            _ => Err(ConfigurationError::UnknownLayout(s.to_string())),
        }
    }
}

/// Pick the presentation for a breakpoint on a platform.
pub fn select(breakpoint: BreakpointClass, platform: PlatformKind) -> LayoutClass {
    match (platform, breakpoint) {
        (PlatformKind::Web, BreakpointClass::Regular) => LayoutClass::FixedSidebar,
        (PlatformKind::Web | PlatformKind::Native, BreakpointClass::Compact) => {
            LayoutClass::DrawerWithTabBar
        }
        (PlatformKind::Native, BreakpointClass::Regular) => LayoutClass::TabBarOnly,
    }
}

/// Select from untyped names, e.g. command-line input.
pub fn select_named(breakpoint: &str, platform: &str) -> Result<LayoutClass, ConfigurationError> {
    Ok(select(breakpoint.parse()?, platform.parse()?))
}

/// Resolve a sample straight to its presentation.
pub fn for_sample(sample: ViewportSample) -> LayoutClass {
    select(breakpoint::resolve(sample), sample.platform)
}

/// Every (platform, breakpoint, layout) row of the table.
pub fn table() -> [(PlatformKind, BreakpointClass, LayoutClass); 4] {
    [
        (PlatformKind::Web, BreakpointClass::Regular, LayoutClass::FixedSidebar),
        (PlatformKind::Web, BreakpointClass::Compact, LayoutClass::DrawerWithTabBar),
        (PlatformKind::Native, BreakpointClass::Compact, LayoutClass::DrawerWithTabBar),
        (PlatformKind::Native, BreakpointClass::Regular, LayoutClass::TabBarOnly),
    ]
}
