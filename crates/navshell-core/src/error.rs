//! Error types for the navigation shell.
//!
//! Configuration problems are fatal at construction time. Unknown screen ids
//! are wiring bugs between the presentation layer and the registry and are
//! always surfaced to the caller.

/// The shell cannot be built (or a typed value cannot be parsed) from the
/// given configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The screen registry was empty.
    #[error("screen registry is empty")]
    EmptyRegistry,

    /// Two descriptors share the same id.
    #[error("duplicate screen id: {0}")]
    DuplicateScreenId(String),

    /// A platform kind outside `web` / `native`.
    #[error("unknown platform kind: {0}")]
    UnknownPlatform(String),

    /// A breakpoint class outside `compact` / `regular`.
    #[error("unknown breakpoint class: {0}")]
    UnknownBreakpoint(String),

    /// A layout class name that is not one of the three presentations.
    #[error("unknown layout class: {0}")]
    UnknownLayout(String),
}

/// A screen id that is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen: {id}")]
pub struct UnknownScreenError {
    /// The rejected id.
    pub id: String,
}

impl UnknownScreenError {
    /// Create an error for the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Any error raised by the shell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// Fatal configuration error.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Selection of an unregistered screen.
    #[error(transparent)]
    UnknownScreen(#[from] UnknownScreenError),
}
