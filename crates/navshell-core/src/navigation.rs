//! Screen registry and active-screen selection.
//!
//! The registry is fixed at construction; only the selection changes.

use std::cell::Cell;
use std::collections::HashSet;
use std::fmt;

use crate::error::{ConfigurationError, UnknownScreenError};
use crate::subscription::{Observers, Subscription};

/// Static metadata and renderers for one navigable screen.
///
/// `N` is the host's renderable node type; the shell never inspects it.
pub struct ScreenDescriptor<N> {
    id: String,
    title: String,
    icon: Box<dyn Fn(bool) -> N>,
    content: Box<dyn Fn() -> N>,
}

impl<N> ScreenDescriptor<N> {
    /// Create a descriptor.
    ///
    /// `icon` receives whether the screen is currently active.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Fn(bool) -> N + 'static,
        content: impl Fn() -> N + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: Box::new(icon),
            content: Box::new(content),
        }
    }

    /// Stable unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the navigation icon.
    pub fn render_icon(&self, active: bool) -> N {
        (self.icon)(active)
    }

    /// Render the screen content.
    pub fn render(&self) -> N {
        (self.content)()
    }
}

impl<N> fmt::Debug for ScreenDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// The current selection as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position in the registry.
    pub index: usize,
    /// Id of the active screen.
    pub id: String,
}

/// Ordered screen registry with exactly one active screen.
pub struct NavigationModel<N> {
    screens: Vec<ScreenDescriptor<N>>,
    active: Cell<usize>,
    observers: Observers<Selection>,
}

impl<N> NavigationModel<N> {
    /// Register the screens. The first one becomes active.
    pub fn new(screens: Vec<ScreenDescriptor<N>>) -> Result<Self, ConfigurationError> {
        if screens.is_empty() {
            return Err(ConfigurationError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for screen in &screens {
            if !seen.insert(screen.id()) {
                return Err(ConfigurationError::DuplicateScreenId(screen.id().to_string()));
            }
        }

        Ok(Self {
            screens,
            active: Cell::new(0),
            observers: Observers::new(),
        })
    }

    /// All registered screens, in registration order.
    pub fn screens(&self) -> &[ScreenDescriptor<N>] {
        &self.screens
    }

    /// Position of `id` in the registry.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.id() == id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The active descriptor.
    pub fn active(&self) -> &ScreenDescriptor<N> {
        &self.screens[self.active.get()]
    }

    /// Id of the active screen.
    pub fn active_id(&self) -> &str {
        self.active().id()
    }

    /// Position of the active screen.
    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        Selection {
            index: self.active_index(),
            id: self.active_id().to_string(),
        }
    }

    /// Make `id` the active screen.
    ///
    /// Returns `Ok(false)` without notifying when `id` is already active. An
    /// unknown id leaves the selection untouched.
    pub fn set_active(&self, id: &str) -> Result<bool, UnknownScreenError> {
        let index = self
            .position(id)
            .ok_or_else(|| UnknownScreenError::new(id))?;

        if index == self.active.get() {
            return Ok(false);
        }

        self.active.set(index);
        self.observers.notify(self.selection());
        Ok(true)
    }

    /// Observe the selection.
    ///
    /// `callback` receives the current selection before this returns, then
    /// every change.
    pub fn observe(&self, mut callback: impl FnMut(&Selection) + 'static) -> Subscription {
        callback(&self.selection());
        self.observers.add(callback)
    }
}

impl<N> fmt::Debug for NavigationModel<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationModel")
            .field("screens", &self.screens)
            .field("active", &self.active.get())
            .finish_non_exhaustive()
    }
}
