//! navshell-core: Headless adaptive navigation shell
//!
//! This crate decides which navigation presentation to show and keeps the
//! active-screen selection consistent across all of them:
//! - Breakpoint resolution and layout selection
//! - Viewport observation through an injectable source
//! - Navigation state with observers
//! - The shell state machine and presentation composition

pub mod breakpoint;
pub mod config;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod shell;
mod subscription;
pub mod viewport;

// Re-export commonly used types
pub use breakpoint::{resolve, BreakpointClass, SizeClass, COMPACT_WIDTH_LIMIT};
pub use config::{ConfigError, IconStyle, ShellConfig};
pub use error::{ConfigurationError, ShellError, UnknownScreenError};
pub use layout::LayoutClass;
pub use navigation::{NavigationModel, ScreenDescriptor, Selection};
pub use shell::{NavItem, Presentation, ShellController, ShellPhase, ShellSnapshot};
pub use subscription::Subscription;
pub use viewport::{
    ChangeSink, ListenerId, ManualViewport, PlatformKind, ViewportMonitor, ViewportSample,
    ViewportSource,
};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
