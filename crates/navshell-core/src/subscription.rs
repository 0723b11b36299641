//! Observer registries and subscription handles.
//!
//! Everything here is single-threaded: callbacks are stored behind `Rc` and
//! invoked synchronously in registration order. A value notified while a
//! round is still running is queued and delivered after it, never dropped.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle returned by every `subscribe`/`observe` call.
///
/// Releasing is idempotent: the first [`Subscription::unsubscribe`] (or the
/// drop of the handle) detaches the callback, later calls do nothing.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Stop receiving notifications.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the callback is still attached.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Callback<T>)>>,
    pending: RefCell<VecDeque<T>>,
    delivering: Cell<bool>,
}

impl<T> Inner<T> {
    fn contains(&self, id: u64) -> bool {
        self.entries.borrow().iter().any(|(entry, _)| *entry == id)
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }
}

/// Ordered list of callbacks for values of type `T`.
pub(crate) struct Observers<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> Observers<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Register a callback. It stays attached until the returned handle is
    /// released.
    pub(crate) fn add(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        self.inner.entries.borrow_mut().push((id, callback));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        })
    }

    /// Deliver `value` to every attached callback.
    ///
    /// Callbacks detached by an earlier callback in the same round are
    /// skipped. A value notified from inside a callback waits until the
    /// running round has finished; queued values go out in arrival order.
    pub(crate) fn notify(&self, value: T) {
        self.inner.pending.borrow_mut().push_back(value);
        if self.inner.delivering.replace(true) {
            tracing::trace!(
                queued = self.inner.pending.borrow().len(),
                "Notification queued behind running round"
            );
            return;
        }

        let _round = DeliveryGuard(&self.inner.delivering);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(value) = next else { break };
            self.deliver(&value);
        }
    }

    fn deliver(&self, value: &T) {
        let round: Vec<(u64, Callback<T>)> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in round {
            if !self.inner.contains(id) {
                continue;
            }
            (&mut *callback.borrow_mut())(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detach every callback and drop queued values. Outstanding handles
    /// become no-ops.
    pub(crate) fn clear(&self) {
        self.inner.entries.borrow_mut().clear();
        self.inner.pending.borrow_mut().clear();
    }
}

/// Clears the delivering flag even if a callback unwinds.
struct DeliveryGuard<'a>(&'a Cell<bool>);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
