//! Viewport observation.
//!
//! The host platform's size/orientation events are reached only through a
//! [`ViewportSource`]. [`ViewportMonitor`] fans a source's change
//! notifications out to subscribers, delivering the current sample
//! synchronously on subscribe.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::subscription::{Observers, Subscription};

/// Kind of runtime platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    /// Browser.
    #[default]
    Web,
    /// Native mobile app.
    Native,
}

impl PlatformKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "native" => Ok(Self::Native),
            _ => Err(ConfigurationError::UnknownPlatform(s.to_string())),
        }
    }
}

/// One observation of the viewport, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportSample {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
    /// Platform the sample was taken on.
    pub platform: PlatformKind,
}

impl ViewportSample {
    /// Create a sample.
    pub fn new(width: u32, height: u32, platform: PlatformKind) -> Self {
        Self {
            width,
            height,
            platform,
        }
    }

    /// The same viewport after an orientation change.
    #[must_use]
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            platform: self.platform,
        }
    }
}

/// Callback a source invokes on every size/orientation change.
pub type ChangeSink = Rc<dyn Fn(ViewportSample)>;

/// Token identifying one registered sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Platform-specific size reader plus change notification.
pub trait ViewportSource {
    /// Read the current size and platform.
    fn read(&self) -> ViewportSample;

    /// Start forwarding change notifications to `sink`.
    fn listen(&mut self, sink: ChangeSink) -> ListenerId;

    /// Stop forwarding to the sink registered under `id`. Other sinks keep
    /// receiving; an unknown id is ignored.
    fn unlisten(&mut self, id: ListenerId);
}

struct ManualState {
    current: ViewportSample,
    next_id: u64,
    sinks: Vec<(ListenerId, ChangeSink)>,
}

/// Push-driven viewport source.
///
/// Clones share state: the host keeps one handle and feeds it platform
/// events (terminal resizes, test sequences) while the monitor owns another.
/// Like a browser's `addEventListener`, every `listen` call adds a sink, so
/// [`ManualViewport::listener_count`] exposes leaked handlers. Each sink is
/// removed only by its own [`ListenerId`], so independent monitors can share
/// one source.
#[derive(Clone)]
pub struct ManualViewport {
    state: Rc<RefCell<ManualState>>,
}

impl ManualViewport {
    /// Create a source reporting `initial` until the first change.
    pub fn new(initial: ViewportSample) -> Self {
        Self {
            state: Rc::new(RefCell::new(ManualState {
                current: initial,
                next_id: 0,
                sinks: Vec::new(),
            })),
        }
    }

    /// Replace the current sample and notify listeners.
    pub fn push(&self, sample: ViewportSample) {
        let sinks: Vec<ChangeSink> = {
            let mut state = self.state.borrow_mut();
            state.current = sample;
            state.sinks.iter().map(|(_, sink)| Rc::clone(sink)).collect()
        };
        for sink in sinks {
            sink(sample);
        }
    }

    /// Resize, keeping the platform kind.
    pub fn resize(&self, width: u32, height: u32) {
        let platform = self.current().platform;
        self.push(ViewportSample::new(width, height, platform));
    }

    /// Swap width and height.
    pub fn rotate(&self) {
        self.push(self.current().rotated());
    }

    /// The sample most recently pushed.
    pub fn current(&self) -> ViewportSample {
        self.state.borrow().current
    }

    /// Number of sinks currently registered.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().sinks.len()
    }
}

impl ViewportSource for ManualViewport {
    fn read(&self) -> ViewportSample {
        self.current()
    }

    fn listen(&mut self, sink: ChangeSink) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.sinks.push((id, sink));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.state
            .borrow_mut()
            .sinks
            .retain(|(listener, _)| *listener != id);
    }
}

struct MonitorInner {
    source: RefCell<Box<dyn ViewportSource>>,
    observers: Observers<ViewportSample>,
    listener: Cell<Option<ListenerId>>,
}

impl MonitorInner {
    fn ensure_listening(self: &Rc<Self>) {
        if self.listener.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let sink: ChangeSink = Rc::new(move |sample| {
            if let Some(inner) = weak.upgrade() {
                inner.dispatch(sample);
            }
        });
        let id = self.source.borrow_mut().listen(sink);
        self.listener.set(Some(id));
        tracing::debug!(listener = ?id, "Attached viewport listener");
    }

    fn release_if_idle(&self) {
        if !self.observers.is_empty() {
            return;
        }
        if let Some(id) = self.listener.take() {
            self.source.borrow_mut().unlisten(id);
            tracing::debug!(listener = ?id, "Detached viewport listener");
        }
    }

    fn dispatch(&self, sample: ViewportSample) {
        tracing::trace!(
            width = sample.width,
            height = sample.height,
            platform = %sample.platform,
            "Viewport changed"
        );
        self.observers.notify(sample);
    }
}

impl Drop for MonitorInner {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            if let Ok(mut source) = self.source.try_borrow_mut() {
                source.unlisten(id);
            }
        }
    }
}

/// Fans viewport samples out to subscribers.
///
/// At most one listener is registered with the source at any time; it is
/// attached with the first subscriber and detached when the last leaves.
#[derive(Clone)]
pub struct ViewportMonitor {
    inner: Rc<MonitorInner>,
}

impl ViewportMonitor {
    /// Create a monitor over the given source.
    pub fn new(source: impl ViewportSource + 'static) -> Self {
        Self {
            inner: Rc::new(MonitorInner {
                source: RefCell::new(Box::new(source)),
                observers: Observers::new(),
                listener: Cell::new(None),
            }),
        }
    }

    /// Read the current sample without subscribing.
    pub fn current(&self) -> ViewportSample {
        self.inner.source.borrow().read()
    }

    /// Subscribe to samples.
    ///
    /// `callback` receives the current sample before this returns, then one
    /// sample per change notification until the subscription is released.
    pub fn subscribe(&self, mut callback: impl FnMut(ViewportSample) + 'static) -> Subscription {
        callback(self.current());

        let mut entry = self
            .inner
            .observers
            .add(move |sample: &ViewportSample| callback(*sample));
        self.inner.ensure_listening();

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            entry.unsubscribe();
            if let Some(inner) = weak.upgrade() {
                inner.release_if_idle();
            }
        })
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Whether a listener is registered with the source.
    pub fn is_listening(&self) -> bool {
        self.inner.listener.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web(width: u32, height: u32) -> ViewportSample {
        ViewportSample::new(width, height, PlatformKind::Web)
    }

    fn recorder() -> (Rc<RefCell<Vec<ViewportSample>>>, impl FnMut(ViewportSample)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |sample: ViewportSample| sink.borrow_mut().push(sample))
    }

    #[test]
    fn test_initial_sample_delivered_synchronously() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source);
        let (log, callback) = recorder();

        let _sub = monitor.subscribe(callback);
        assert_eq!(*log.borrow(), vec![web(1200, 800)]);
    }

    #[test]
    fn test_changes_delivered_in_order() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());
        let (log, callback) = recorder();
        let _sub = monitor.subscribe(callback);

        source.resize(600, 800);
        source.rotate();

        assert_eq!(
            *log.borrow(),
            vec![web(1200, 800), web(600, 800), web(800, 600)]
        );
    }

    #[test]
    fn test_double_unsubscribe_is_safe_and_silences() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());
        let (log, callback) = recorder();

        let mut sub = monitor.subscribe(callback);
        sub.unsubscribe();
        sub.unsubscribe();
        source.resize(300, 300);

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(source.listener_count(), 0);
        assert!(!monitor.is_listening());
    }

    #[test]
    fn test_resubscribe_keeps_single_listener() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());

        let mut first = monitor.subscribe(|_| {});
        first.unsubscribe();
        let (log, callback) = recorder();
        let _second = monitor.subscribe(callback);
        let _third = monitor.subscribe(|_| {});

        assert_eq!(source.listener_count(), 1);
        assert_eq!(monitor.subscriber_count(), 2);

        source.resize(500, 500);
        assert_eq!(*log.borrow(), vec![web(1200, 800), web(500, 500)]);
    }

    #[test]
    fn test_listener_kept_while_any_subscriber_remains() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());

        let mut a = monitor.subscribe(|_| {});
        let (log, callback) = recorder();
        let _b = monitor.subscribe(callback);

        a.unsubscribe();
        assert!(monitor.is_listening());
        source.resize(640, 480);
        assert_eq!(log.borrow().last(), Some(&web(640, 480)));
    }

    #[test]
    fn test_dropping_monitor_detaches_source() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());
        let sub = monitor.subscribe(|_| {});
        assert_eq!(source.listener_count(), 1);

        drop(monitor);
        assert_eq!(source.listener_count(), 0);
        drop(sub);
        // Late pushes after teardown are harmless.
        source.resize(10, 10);
    }

    #[test]
    fn test_unsubscribe_from_inside_callback() {
        let source = ManualViewport::new(web(1200, 800));
        let monitor = ViewportMonitor::new(source.clone());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let handle = Rc::clone(&slot);
        let counter = Rc::clone(&count);
        let sub = monitor.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if counter.get() > 1 {
                if let Some(mut sub) = handle.borrow_mut().take() {
                    sub.unsubscribe();
                }
            }
        });
        *slot.borrow_mut() = Some(sub);

        source.resize(700, 700);
        source.resize(800, 800);
        assert_eq!(count.get(), 2);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_unlisten_removes_only_matching_sink() {
        fn logging_sink() -> (Rc<RefCell<Vec<ViewportSample>>>, ChangeSink) {
            let log = Rc::new(RefCell::new(Vec::new()));
            let entries = Rc::clone(&log);
            let sink: ChangeSink =
                Rc::new(move |sample: ViewportSample| entries.borrow_mut().push(sample));
            (log, sink)
        }

        let mut source = ManualViewport::new(web(1200, 800));
        let (first_log, first) = logging_sink();
        let (second_log, second) = logging_sink();

        let a = source.listen(first);
        let b = source.listen(second);
        assert_ne!(a, b);

        source.unlisten(a);
        source.unlisten(a);
        source.resize(640, 480);

        assert!(first_log.borrow().is_empty());
        assert_eq!(*second_log.borrow(), vec![web(640, 480)]);
        assert_eq!(source.listener_count(), 1);

        source.unlisten(b);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_monitors_sharing_a_source_are_independent() {
        let source = ManualViewport::new(web(1200, 800));
        let left = ViewportMonitor::new(source.clone());
        let right = ViewportMonitor::new(source.clone());

        let mut left_sub = left.subscribe(|_| {});
        let (log, callback) = recorder();
        let _right_sub = right.subscribe(callback);
        assert_eq!(source.listener_count(), 2);

        left_sub.unsubscribe();
        assert!(!left.is_listening());
        assert!(right.is_listening());
        assert_eq!(source.listener_count(), 1);

        drop(left);
        source.resize(600, 800);
        assert_eq!(*log.borrow(), vec![web(1200, 800), web(600, 800)]);
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("WEB".parse::<PlatformKind>(), Ok(PlatformKind::Web));
        assert_eq!("native".parse::<PlatformKind>(), Ok(PlatformKind::Native));
        assert!(matches!(
            "desktop".parse::<PlatformKind>(),
            Err(ConfigurationError::UnknownPlatform(_))
        ));
    }
}
