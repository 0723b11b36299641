//! Theme components for the shell chrome.
//!
//! This module provides:
//! - [`Theme`] - Role-named chrome colors, plain under `NO_COLOR`
//! - [`IconSet`] - Navigation icons with Nerd/Unicode/ASCII styles
//! - [`BorderSet`] - Border characters with ASCII fallback

mod borders;
mod colors;
mod icons;

pub use borders::BorderSet;
pub use colors::Theme;
pub use icons::IconSet;
