//! Layout rendering for the TUI.
//!
//! This module provides:
//! - [`render_presentation`] - Draws any [`Presentation`](navshell_core::Presentation)
//! - [`Chrome`] - Styling and drawer cursor shared by the chrome widgets

mod shell;

pub use shell::{render_presentation, Chrome, DRAWER_WIDTH, MIN_HEIGHT, MIN_WIDTH};
