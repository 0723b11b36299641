//! Shell controller: the adaptive navigation state machine.
//!
//! States are [`ShellPhase::Initializing`] plus one per [`LayoutClass`].
//! Viewport samples move between layouts; user actions move the selection
//! and the drawer. Every effective change is published to observers exactly
//! once, and [`ShellController::compose`] builds the single presentation for
//! the current state.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::{ConfigurationError, UnknownScreenError};
use crate::layout::{self, LayoutClass};
use crate::navigation::{NavigationModel, ScreenDescriptor};
use crate::subscription::{Observers, Subscription};
use crate::viewport::{ViewportMonitor, ViewportSample};

/// Lifecycle phase of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellPhase {
    /// No viewport sample received yet.
    #[default]
    Initializing,
    /// Presenting the given layout.
    Active(LayoutClass),
}

impl ShellPhase {
    /// Current layout, if any.
    pub fn layout(self) -> Option<LayoutClass> {
        match self {
            Self::Initializing => None,
            Self::Active(layout) => Some(layout),
        }
    }
}

impl fmt::Display for ShellPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => f.write_str("initializing"),
            Self::Active(layout) => layout.fmt(f),
        }
    }
}

/// Observable shell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSnapshot {
    /// Current phase.
    pub phase: ShellPhase,
    /// Id of the active screen.
    pub active_screen_id: String,
    /// Whether the drawer overlay is open.
    pub drawer_open: bool,
}

/// One entry of a navigation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem<N> {
    /// Screen id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Rendered icon for the current active state.
    pub icon: N,
    /// Whether this is the active screen.
    pub active: bool,
}

/// The composed shell: exactly one navigation surface around the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation<N> {
    /// Sidebar plus content.
    FixedSidebar {
        /// Sidebar entries.
        items: Vec<NavItem<N>>,
        /// Active screen content.
        content: N,
    },
    /// Content, bottom tab bar, and (when open) a drawer overlay.
    DrawerWithTabBar {
        /// Entries shared by the drawer and the tab bar.
        items: Vec<NavItem<N>>,
        /// Whether the drawer overlay is shown.
        drawer_open: bool,
        /// Active screen content.
        content: N,
    },
    /// Content plus bottom tab bar.
    TabBarOnly {
        /// Tab bar entries.
        items: Vec<NavItem<N>>,
        /// Active screen content.
        content: N,
    },
}

impl<N> Presentation<N> {
    /// Layout this presentation renders.
    pub fn layout(&self) -> LayoutClass {
        match self {
            Self::FixedSidebar { .. } => LayoutClass::FixedSidebar,
            Self::DrawerWithTabBar { .. } => LayoutClass::DrawerWithTabBar,
            Self::TabBarOnly { .. } => LayoutClass::TabBarOnly,
        }
    }

    /// Navigation entries.
    pub fn items(&self) -> &[NavItem<N>] {
        match self {
            Self::FixedSidebar { items, .. }
            | Self::DrawerWithTabBar { items, .. }
            | Self::TabBarOnly { items, .. } => items,
        }
    }

    /// Active screen content.
    pub fn content(&self) -> &N {
        match self {
            Self::FixedSidebar { content, .. }
            | Self::DrawerWithTabBar { content, .. }
            | Self::TabBarOnly { content, .. } => content,
        }
    }

    /// Whether a drawer overlay is shown.
    pub fn drawer_open(&self) -> bool {
        matches!(
            self,
            Self::DrawerWithTabBar {
                drawer_open: true,
                ..
            }
        )
    }
}

#[derive(Debug, Default)]
struct ShellState {
    phase: ShellPhase,
    drawer_open: bool,
    last_sample: Option<ViewportSample>,
}

struct ShellInner<N: 'static> {
    navigation: NavigationModel<N>,
    state: RefCell<ShellState>,
    observers: Observers<ShellSnapshot>,
    viewport: RefCell<Option<Subscription>>,
    torn_down: Cell<bool>,
}

impl<N: 'static> ShellInner<N> {
    fn snapshot(&self) -> ShellSnapshot {
        let state = self.state.borrow();
        ShellSnapshot {
            phase: state.phase,
            active_screen_id: self.navigation.active_id().to_string(),
            drawer_open: state.drawer_open,
        }
    }

    fn publish(&self) {
        self.observers.notify(self.snapshot());
    }

    fn apply_sample(&self, sample: ViewportSample) {
        if self.torn_down.get() {
            return;
        }
        let layout = layout::for_sample(sample);

        let changed = {
            let mut state = self.state.borrow_mut();
            state.last_sample = Some(sample);
            match state.phase {
                ShellPhase::Active(current) if current == layout => false,
                previous => {
                    state.phase = ShellPhase::Active(layout);
                    state.drawer_open = false;
                    info!(
                        from = %previous,
                        to = %layout,
                        width = sample.width,
                        platform = %sample.platform,
                        "Layout changed"
                    );
                    true
                }
            }
        };

        if changed {
            self.publish();
        }
    }

    /// Set the drawer flag, publishing if it changed.
    fn set_drawer(&self, open: bool) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.drawer_open == open {
                return false;
            }
            state.drawer_open = open;
        }
        self.publish();
        true
    }
}

/// Top-level orchestrator of the adaptive navigation shell.
///
/// Owns the navigation state and the viewport subscription. The type is
/// single-threaded; all operations run synchronously and return immediately.
pub struct ShellController<N: 'static> {
    inner: Rc<ShellInner<N>>,
}

impl<N: 'static> ShellController<N> {
    /// Build a shell over `screens`, subscribed to `monitor`.
    ///
    /// The monitor delivers its current sample during construction, so the
    /// returned shell already presents a layout.
    pub fn new(
        screens: Vec<ScreenDescriptor<N>>,
        monitor: &ViewportMonitor,
    ) -> Result<Self, ConfigurationError> {
        let navigation = NavigationModel::new(screens)?;

        let inner = Rc::new(ShellInner {
            navigation,
            state: RefCell::new(ShellState::default()),
            observers: Observers::new(),
            viewport: RefCell::new(None),
            torn_down: Cell::new(false),
        });

        let weak = Rc::downgrade(&inner);
        let subscription = monitor.subscribe(move |sample| {
            if let Some(inner) = weak.upgrade() {
                inner.apply_sample(sample);
            }
        });
        *inner.viewport.borrow_mut() = Some(subscription);

        debug!(
            screens = inner.navigation.screens().len(),
            phase = %inner.state.borrow().phase,
            "Shell constructed"
        );
        Ok(Self { inner })
    }

    /// Current observable state.
    pub fn snapshot(&self) -> ShellSnapshot {
        self.inner.snapshot()
    }

    /// Current phase.
    pub fn phase(&self) -> ShellPhase {
        self.inner.state.borrow().phase
    }

    /// Current layout, `None` while initializing.
    pub fn layout(&self) -> Option<LayoutClass> {
        self.phase().layout()
    }

    /// Id of the active screen.
    pub fn active_screen_id(&self) -> &str {
        self.inner.navigation.active_id()
    }

    /// Position of the active screen in the registry.
    pub fn active_index(&self) -> usize {
        self.inner.navigation.active_index()
    }

    /// Whether the drawer overlay is open.
    pub fn is_drawer_open(&self) -> bool {
        self.inner.state.borrow().drawer_open
    }

    /// The most recent viewport sample.
    pub fn viewport(&self) -> Option<ViewportSample> {
        self.inner.state.borrow().last_sample
    }

    /// Registered screens, in order.
    pub fn screens(&self) -> &[ScreenDescriptor<N>] {
        self.inner.navigation.screens()
    }

    /// Whether [`ShellController::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.get()
    }

    /// Observe state changes (the re-render trigger).
    ///
    /// `callback` receives the current snapshot before this returns, then
    /// exactly one snapshot per effective change.
    pub fn observe(&self, mut callback: impl FnMut(&ShellSnapshot) + 'static) -> Subscription {
        callback(&self.snapshot());
        self.inner.observers.add(callback)
    }

    /// Open the drawer. Ignored unless the layout is drawer + tab bar.
    pub fn open_drawer(&self) -> bool {
        if self.is_torn_down() {
            return false;
        }
        if self.layout() != Some(LayoutClass::DrawerWithTabBar) {
            debug!(phase = %self.phase(), "Ignoring drawer open outside drawer layout");
            return false;
        }
        self.inner.set_drawer(true)
    }

    /// Close the drawer without changing the selection.
    pub fn dismiss_drawer(&self) -> bool {
        if self.is_torn_down() {
            return false;
        }
        self.inner.set_drawer(false)
    }

    /// Open the drawer when closed, dismiss it when open.
    pub fn toggle_drawer(&self) -> bool {
        if self.is_drawer_open() {
            self.dismiss_drawer()
        } else {
            self.open_drawer()
        }
    }

    /// Select a screen from the tab bar or sidebar. Legal in every phase.
    ///
    /// Returns `Ok(false)` when the screen was already active.
    pub fn select_tab(&self, id: &str) -> Result<bool, UnknownScreenError> {
        if !self.inner.navigation.contains(id) {
            let err = UnknownScreenError::new(id);
            warn!(error = %err, "Rejected tab selection");
            return Err(err);
        }
        if self.is_torn_down() {
            return Ok(false);
        }

        let changed = self.inner.navigation.set_active(id)?;
        if changed {
            self.inner.publish();
        }
        Ok(changed)
    }

    /// Select a screen from the open drawer and close it, as one change.
    ///
    /// A selection arriving while the drawer is closed is stale and ignored.
    /// An unknown id leaves both the selection and the drawer untouched.
    pub fn select_from_drawer(&self, id: &str) -> Result<bool, UnknownScreenError> {
        if !self.inner.navigation.contains(id) {
            let err = UnknownScreenError::new(id);
            warn!(error = %err, "Rejected drawer selection");
            return Err(err);
        }
        if self.is_torn_down() || !self.is_drawer_open() {
            debug!(id, "Ignoring drawer selection while drawer is closed");
            return Ok(false);
        }

        self.inner.navigation.set_active(id)?;
        self.inner.state.borrow_mut().drawer_open = false;
        self.inner.publish();
        Ok(true)
    }

    /// Compose the presentation for the current state.
    ///
    /// Returns `None` while initializing. Panics raised by screen renderers
    /// propagate to the caller.
    pub fn compose(&self) -> Option<Presentation<N>> {
        let (layout, drawer_open) = {
            let state = self.inner.state.borrow();
            (state.phase.layout()?, state.drawer_open)
        };

        let navigation = &self.inner.navigation;
        let active = navigation.active_index();
        let items: Vec<NavItem<N>> = navigation
            .screens()
            .iter()
            .enumerate()
            .map(|(index, screen)| NavItem {
                id: screen.id().to_string(),
                title: screen.title().to_string(),
                icon: screen.render_icon(index == active),
                active: index == active,
            })
            .collect();
        let content = navigation.active().render();

        Some(match layout {
            LayoutClass::FixedSidebar => Presentation::FixedSidebar { items, content },
            LayoutClass::DrawerWithTabBar => Presentation::DrawerWithTabBar {
                items,
                drawer_open,
                content,
            },
            LayoutClass::TabBarOnly => Presentation::TabBarOnly { items, content },
        })
    }

    /// Release the viewport subscription, then the observers.
    ///
    /// Safe to call repeatedly; only the first call has an effect. Also runs
    /// on drop.
    pub fn teardown(&self) {
        if self.inner.torn_down.replace(true) {
            return;
        }
        let subscription = self.inner.viewport.borrow_mut().take();
        if let Some(mut subscription) = subscription {
            subscription.unsubscribe();
        }
        self.inner.observers.clear();
        debug!("Shell torn down");
    }
}

impl<N: 'static> Drop for ShellController<N> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<N: 'static> fmt::Debug for ShellController<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellController")
            .field("snapshot", &self.snapshot())
            .field("torn_down", &self.is_torn_down())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{ManualViewport, PlatformKind};

    fn screen(id: &str) -> ScreenDescriptor<String> {
        let icon_id = id.to_string();
        let content_id = id.to_string();
        ScreenDescriptor::new(
            id,
            id,
            move |active| {
                if active {
                    format!("[{icon_id}]")
                } else {
                    icon_id.clone()
                }
            },
            move || format!("<{content_id}>"),
        )
    }

    fn registry() -> Vec<ScreenDescriptor<String>> {
        vec![screen("posts"), screen("members"), screen("profile")]
    }

    fn web(width: u32) -> ViewportSample {
        ViewportSample::new(width, 800, PlatformKind::Web)
    }

    fn native(width: u32) -> ViewportSample {
        ViewportSample::new(width, 800, PlatformKind::Native)
    }

    fn shell_at(sample: ViewportSample) -> (ManualViewport, ShellController<String>) {
        let source = ManualViewport::new(sample);
        let monitor = ViewportMonitor::new(source.clone());
        let shell = ShellController::new(registry(), &monitor).unwrap();
        (source, shell)
    }

    fn record(shell: &ShellController<String>) -> (Rc<RefCell<Vec<ShellSnapshot>>>, Subscription) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let sub = shell.observe(move |snap| sink.borrow_mut().push(snap.clone()));
        log.borrow_mut().clear();
        (log, sub)
    }

    #[test]
    fn test_scenario_wide_web_starts_with_sidebar() {
        let (_source, shell) = shell_at(web(1200));
        assert_eq!(shell.layout(), Some(LayoutClass::FixedSidebar));
        assert_eq!(shell.active_screen_id(), "posts");
        assert!(!shell.is_drawer_open());
    }

    #[test]
    fn test_scenario_shrink_to_drawer_keeps_selection() {
        let (source, shell) = shell_at(web(1200));
        source.push(web(600));

        assert_eq!(shell.layout(), Some(LayoutClass::DrawerWithTabBar));
        assert!(!shell.is_drawer_open());
        assert_eq!(shell.active_screen_id(), "posts");
    }

    #[test]
    fn test_scenario_drawer_selection_is_atomic() {
        let (source, shell) = shell_at(web(1200));
        source.push(web(600));
        let (log, _sub) = record(&shell);

        assert!(shell.open_drawer());
        assert_eq!(shell.select_from_drawer("members"), Ok(true));

        assert_eq!(shell.active_screen_id(), "members");
        assert!(!shell.is_drawer_open());

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert!(log[0].drawer_open && log[0].active_screen_id == "posts");
        assert!(!log[1].drawer_open && log[1].active_screen_id == "members");
        assert!(!log
            .iter()
            .any(|s| s.drawer_open && s.active_screen_id == "members"));
    }

    #[test]
    fn test_scenario_empty_registry_is_fatal() {
        let monitor = ViewportMonitor::new(ManualViewport::new(web(1200)));
        let err = ShellController::<String>::new(Vec::new(), &monitor).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyRegistry);
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_are_fatal() {
        let monitor = ViewportMonitor::new(ManualViewport::new(web(1200)));
        let err = ShellController::new(vec![screen("posts"), screen("posts")], &monitor)
            .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateScreenId("posts".into()));
    }

    #[test]
    fn test_native_layouts() {
        let (source, shell) = shell_at(native(1200));
        assert_eq!(shell.layout(), Some(LayoutClass::TabBarOnly));
        source.push(native(400));
        assert_eq!(shell.layout(), Some(LayoutClass::DrawerWithTabBar));
    }

    #[test]
    fn test_layout_change_force_closes_drawer() {
        let (source, shell) = shell_at(web(600));
        shell.select_tab("profile").unwrap();
        assert!(shell.open_drawer());

        source.push(web(1400));
        assert_eq!(shell.layout(), Some(LayoutClass::FixedSidebar));
        assert!(!shell.is_drawer_open());
        assert_eq!(shell.active_screen_id(), "profile");
    }

    #[test]
    fn test_stale_open_request_ignored() {
        let (source, shell) = shell_at(web(600));
        source.push(web(1200));
        assert!(!shell.open_drawer());
        assert!(!shell.is_drawer_open());

        let (_source, native_shell) = shell_at(native(1200));
        assert!(!native_shell.open_drawer());
    }

    #[test]
    fn test_stale_drawer_selection_ignored() {
        let (_source, shell) = shell_at(web(600));
        assert_eq!(shell.select_from_drawer("members"), Ok(false));
        assert_eq!(shell.active_screen_id(), "posts");
    }

    #[test]
    fn test_dismiss_keeps_selection() {
        let (_source, shell) = shell_at(web(600));
        shell.open_drawer();
        assert!(shell.dismiss_drawer());
        assert!(!shell.dismiss_drawer());
        assert_eq!(shell.active_screen_id(), "posts");
    }

    #[test]
    fn test_toggle_drawer() {
        let (_source, shell) = shell_at(web(600));
        assert!(shell.toggle_drawer());
        assert!(shell.is_drawer_open());
        assert!(shell.toggle_drawer());
        assert!(!shell.is_drawer_open());
    }

    #[test]
    fn test_select_tab_in_every_layout() {
        for sample in [web(1200), web(600), native(1200)] {
            let (_source, shell) = shell_at(sample);
            assert_eq!(shell.select_tab("profile"), Ok(true));
            assert_eq!(shell.select_tab("profile"), Ok(false));
            assert_eq!(shell.active_screen_id(), "profile");
        }
    }

    #[test]
    fn test_unknown_screen_is_surfaced_and_harmless() {
        let (_source, shell) = shell_at(web(600));
        shell.select_tab("members").unwrap();
        shell.open_drawer();
        let (log, _sub) = record(&shell);

        assert_eq!(
            shell.select_tab("settings"),
            Err(UnknownScreenError::new("settings"))
        );
        assert_eq!(
            shell.select_from_drawer("settings"),
            Err(UnknownScreenError::new("settings"))
        );

        assert_eq!(shell.active_screen_id(), "members");
        assert!(shell.is_drawer_open());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_one_notification_per_effective_event() {
        let (source, shell) = shell_at(web(1200));
        let (log, _sub) = record(&shell);

        source.push(web(1300)); // same layout
        assert_eq!(log.borrow().len(), 0);

        source.push(web(700));
        assert_eq!(log.borrow().len(), 1);

        shell.select_tab("members").unwrap();
        shell.select_tab("members").unwrap();
        assert_eq!(log.borrow().len(), 2);

        shell.open_drawer();
        shell.open_drawer();
        assert_eq!(log.borrow().len(), 3);

        source.push(web(1000));
        assert_eq!(log.borrow().len(), 4);
        let last = log.borrow().last().cloned().unwrap();
        assert_eq!(last.phase, ShellPhase::Active(LayoutClass::FixedSidebar));
        assert!(!last.drawer_open);
    }

    #[test]
    fn test_compose_single_presentation() {
        let (source, shell) = shell_at(web(1200));
        shell.select_tab("members").unwrap();

        let sidebar = shell.compose().unwrap();
        assert_eq!(sidebar.layout(), LayoutClass::FixedSidebar);
        assert_eq!(sidebar.content(), "<members>");
        let icons: Vec<&str> = sidebar.items().iter().map(|i| i.icon.as_str()).collect();
        assert_eq!(icons, vec!["posts", "[members]", "profile"]);

        source.push(web(500));
        shell.open_drawer();
        let drawer = shell.compose().unwrap();
        assert_eq!(drawer.layout(), LayoutClass::DrawerWithTabBar);
        assert!(drawer.drawer_open());
        assert_eq!(drawer.items().iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn test_teardown_releases_subscription_once() {
        let source = ManualViewport::new(web(1200));
        let monitor = ViewportMonitor::new(source.clone());
        let shell = ShellController::new(registry(), &monitor).unwrap();
        let (log, _sub) = record(&shell);
        assert_eq!(source.listener_count(), 1);

        shell.teardown();
        shell.teardown();
        assert_eq!(monitor.subscriber_count(), 0);
        assert_eq!(source.listener_count(), 0);

        source.push(web(500));
        assert_eq!(shell.layout(), Some(LayoutClass::FixedSidebar));
        assert!(log.borrow().is_empty());
        assert!(!shell.open_drawer());

        drop(shell);
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let source = ManualViewport::new(web(1200));
        let monitor = ViewportMonitor::new(source.clone());
        {
            let _shell = ShellController::new(registry(), &monitor).unwrap();
            assert_eq!(monitor.subscriber_count(), 1);
        }
        assert_eq!(monitor.subscriber_count(), 0);
        source.push(web(300));
    }

    #[test]
    fn test_two_shells_share_one_listener() {
        let source = ManualViewport::new(web(1200));
        let monitor = ViewportMonitor::new(source.clone());
        let a = ShellController::new(registry(), &monitor).unwrap();
        let b = ShellController::new(registry(), &monitor).unwrap();
        assert_eq!(source.listener_count(), 1);

        source.push(web(500));
        assert_eq!(a.layout(), Some(LayoutClass::DrawerWithTabBar));
        assert_eq!(b.layout(), Some(LayoutClass::DrawerWithTabBar));
    }

    #[test]
    fn test_sample_pushed_by_observer_is_applied_in_order() {
        let (source, shell) = shell_at(web(1200));
        let host = source.clone();
        let resized = Rc::new(Cell::new(false));
        let once = Rc::clone(&resized);
        let _widen_on_drawer = shell.observe(move |snap| {
            if snap.phase == ShellPhase::Active(LayoutClass::DrawerWithTabBar) && !once.replace(true)
            {
                host.push(web(1300));
            }
        });
        let (log, _sub) = record(&shell);

        source.push(web(600));

        assert!(resized.get());
        assert_eq!(source.current(), web(1300));
        assert_eq!(shell.layout(), Some(LayoutClass::FixedSidebar));
        assert!(!shell.is_drawer_open());
        let phases: Vec<ShellPhase> = log.borrow().iter().map(|snap| snap.phase).collect();
        assert_eq!(
            phases,
            vec![
                ShellPhase::Active(LayoutClass::DrawerWithTabBar),
                ShellPhase::Active(LayoutClass::FixedSidebar),
            ]
        );
    }

    #[test]
    fn test_teardown_keeps_other_monitor_on_shared_source() {
        let source = ManualViewport::new(web(1200));
        let left = ViewportMonitor::new(source.clone());
        let right = ViewportMonitor::new(source.clone());
        let a = ShellController::new(registry(), &left).unwrap();
        let b = ShellController::new(registry(), &right).unwrap();
        assert_eq!(source.listener_count(), 2);

        a.teardown();
        assert_eq!(source.listener_count(), 1);
        assert!(right.is_listening());

        source.push(web(600));
        assert_eq!(b.layout(), Some(LayoutClass::DrawerWithTabBar));
        assert_eq!(a.layout(), Some(LayoutClass::FixedSidebar));
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_drawer_only_open_in_drawer_layout() {
        let (source, shell) = shell_at(web(1200));
        let (log, _sub) = record(&shell);

        // Deterministic pseudo-random walk over samples and drawer actions.
        let widths = [320, 600, 899, 900, 1200, 2000];
        let ids = ["posts", "members", "profile"];
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let pick = (seed >> 8) as usize;
            match pick % 7 {
                0 => source.push(web(widths[pick % widths.len()])),
                1 => source.push(native(widths[pick % widths.len()])),
                2 => {
                    shell.open_drawer();
                }
                3 => {
                    shell.dismiss_drawer();
                }
                4 => {
                    shell.toggle_drawer();
                }
                5 => {
                    shell.select_from_drawer(ids[pick % ids.len()]).unwrap();
                }
                _ => {
                    shell.select_tab(ids[pick % ids.len()]).unwrap();
                }
            }
            if shell.is_drawer_open() {
                assert_eq!(shell.layout(), Some(LayoutClass::DrawerWithTabBar));
            }
        }

        for snap in log.borrow().iter() {
            if snap.drawer_open {
                assert_eq!(snap.phase, ShellPhase::Active(LayoutClass::DrawerWithTabBar));
            }
        }
    }
}
