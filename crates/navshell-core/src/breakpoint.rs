//! Width breakpoints.
//!
//! - [`BreakpointClass`]: Compact (< 900px) / Regular, the only input to layout selection
//! - [`SizeClass`]: Mobile / Tablet / Desktop hints for content screens

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::viewport::ViewportSample;

/// Widths below this many logical pixels are compact.
pub const COMPACT_WIDTH_LIMIT: u32 = 900;

/// Width at which content screens stop using the mobile arrangement.
pub const TABLET_MIN_WIDTH: u32 = 768;

/// Width at which content screens use the desktop arrangement.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Breakpoint class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointClass {
    /// Narrow viewport (width < 900).
    Compact,
    /// Wide viewport (width >= 900).
    Regular,
}

impl BreakpointClass {
    /// Classify a raw width.
    pub fn from_width(width: u32) -> Self {
        if width < COMPACT_WIDTH_LIMIT {
            Self::Compact
        } else {
            Self::Regular
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Regular => "regular",
        }
    }
}

impl std::fmt::Display for BreakpointClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakpointClass {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "regular" => Ok(Self::Regular),
            _ => Err(ConfigurationError::UnknownBreakpoint(s.to_string())),
        }
    }
}

/// Resolve the breakpoint class of a sample. Height and platform are ignored.
pub fn resolve(sample: ViewportSample) -> BreakpointClass {
    BreakpointClass::from_width(sample.width)
}

/// Responsive size hint for screen content.
///
/// Never consulted for navigation layout; see [`crate::layout::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Width < 768.
    Mobile,
    /// 768 <= width < 1024.
    Tablet,
    /// Width >= 1024.
    Desktop,
}

impl SizeClass {
    /// Classify a raw width.
    pub fn from_width(width: u32) -> Self {
        match width {
            w if w >= DESKTOP_MIN_WIDTH => Self::Desktop,
            w if w >= TABLET_MIN_WIDTH => Self::Tablet,
            _ => Self::Mobile,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
