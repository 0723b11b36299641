//! Navigation chrome widgets.
//!
//! This module provides:
//! - [`Sidebar`] - Vertical navigation list (fixed sidebar and drawer)
//! - [`TabBar`] - Bottom tab bar
//! - [`AppBar`] - Top bar with the drawer button
//! - [`Pane`] - Bordered content pane
//! - [`hints_for_layout`] - Keybinding hints per layout

mod app_bar;
mod key_hints;
mod pane;
mod sidebar;
mod tab_bar;

pub use app_bar::AppBar;
pub use key_hints::hints_for_layout;
pub use pane::Pane;
pub use sidebar::{Sidebar, SIDEBAR_WIDTH};
pub use tab_bar::{TabBar, TAB_BAR_HEIGHT};
