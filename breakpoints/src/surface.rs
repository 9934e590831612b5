//! The observable surface seam.
//!
//! A [`Surface`] is whatever is being measured: the browser window, a
//! test double, or nothing at all. It answers two things: its size right
//! now, and "tell me when you resize". Every subscription comes back as a
//! [`Subscription`] guard whose release runs exactly once, either through
//! [`Subscription::cancel`] or when the guard is dropped.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::classification::Viewport;

/// Callback invoked with the new size on every resize notification.
pub type ResizeListener = Box<dyn FnMut(Viewport)>;

/// Something with a size that can announce resizes.
pub trait Surface {
    /// Current size, or `None` when there is no surface to measure
    /// (server rendering, tests without a window).
    fn viewport(&self) -> Option<Viewport>;

    /// Register `listener` for resize notifications.
    ///
    /// The listener stays registered until the returned guard is cancelled
    /// or dropped.
    fn subscribe(&self, listener: ResizeListener) -> Subscription;
}

/// Guard for a resize registration.
///
/// Releasing is idempotent: the release action runs on the first
/// [`cancel`](Subscription::cancel) or on drop, never twice.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Guard that runs `release` when cancelled or dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Whether the release action has yet to run.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Run the release action if it has not run yet.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// No surface. The observer stays at `(0, 0)` and never subscribes.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessSurface;

impl Surface for HeadlessSurface {
    fn viewport(&self) -> Option<Viewport> {
        None
    }

    fn subscribe(&self, _listener: ResizeListener) -> Subscription {
        Subscription::detached()
    }
}

type SharedListener = Rc<RefCell<ResizeListener>>;

struct ManualListener {
    id: u64,
    // cleared on release, so a dispatch already in flight skips it
    live: Rc<Cell<bool>>,
    call: SharedListener,
}

#[derive(Default)]
struct ManualInner {
    viewport: Viewport,
    listeners: Vec<ManualListener>,
    next_id: u64,
    queued: VecDeque<Viewport>,
    dispatching: bool,
}

impl ManualInner {
    fn snapshot(&self) -> Vec<(Rc<Cell<bool>>, SharedListener)> {
        self.listeners
            .iter()
            .map(|l| (Rc::clone(&l.live), Rc::clone(&l.call)))
            .collect()
    }
}

/// A surface resized by hand.
///
/// Used for non-browser hosts that learn about size changes some other
/// way, and for driving observers in tests. Clones share the same
/// underlying surface.
#[derive(Clone, Default)]
pub struct ManualSurface {
    inner: Rc<RefCell<ManualInner>>,
    releases: Rc<Cell<usize>>,
}

impl ManualSurface {
    /// Surface starting at `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                viewport,
                ..ManualInner::default()
            })),
            releases: Rc::default(),
        }
    }

    /// Change the size and notify every listener, in subscription order.
    ///
    /// A listener released while a resize is being delivered is not called
    /// again, even for that resize. Resizes requested from inside a
    /// listener are queued and delivered after the current one.
    pub fn resize(&self, viewport: Viewport) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.viewport = viewport;
            inner.queued.push_back(viewport);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        loop {
            // snapshot so listeners may read, subscribe to or release from this surface
            let (viewport, listeners) = {
                let mut inner = self.inner.borrow_mut();
                match inner.queued.pop_front() {
                    Some(next) => (next, inner.snapshot()),
                    None => {
                        inner.dispatching = false;
                        return;
                    }
                }
            };
            for (live, listener) in listeners {
                if live.get() {
                    (&mut *listener.borrow_mut())(viewport);
                }
            }
        }
    }

    /// Listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// How many subscriptions have been released so far.
    pub fn release_count(&self) -> usize {
        self.releases.get()
    }
}

impl Surface for ManualSurface {
    fn viewport(&self) -> Option<Viewport> {
        Some(self.inner.borrow().viewport)
    }

    fn subscribe(&self, listener: ResizeListener) -> Subscription {
        let live = Rc::new(Cell::new(true));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push(ManualListener {
                id,
                live: Rc::clone(&live),
                call: Rc::new(RefCell::new(listener)),
            });
            id
        };

        let inner = Rc::downgrade(&self.inner);
        let releases = Rc::clone(&self.releases);
        Subscription::new(move || {
            live.set(false);
            releases.set(releases.get() + 1);
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}

impl fmt::Debug for ManualSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualSurface")
            .field("viewport", &inner.viewport)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_releases_once_on_cancel_then_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut sub = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(sub.is_active());
        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscription_releases_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        {
            let _sub = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn manual_surface_notifies_until_released() {
        let surface = ManualSurface::new(Viewport::new(100, 100));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = surface.subscribe(Box::new(move |vp: Viewport| sink.borrow_mut().push(vp.width)));

        surface.resize(Viewport::new(200, 100));
        surface.resize(Viewport::new(300, 100));
        drop(sub);
        surface.resize(Viewport::new(400, 100));

        assert_eq!(*seen.borrow(), vec![200, 300]);
        assert_eq!(surface.viewport(), Some(Viewport::new(400, 100)));
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.release_count(), 1);
    }

    #[test]
    fn listener_may_read_surface_during_dispatch() {
        let surface = ManualSurface::new(Viewport::ZERO);
        let handle = surface.clone();
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let _sub = surface.subscribe(Box::new(move |_: Viewport| sink.set(handle.viewport())));

        surface.resize(Viewport::new(640, 480));
        assert_eq!(seen.get(), Some(Viewport::new(640, 480)));
    }

    #[test]
    fn listener_released_mid_dispatch_is_skipped() {
        let surface = ManualSurface::new(Viewport::ZERO);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let later: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let slot = Rc::clone(&later);
        let _first = surface.subscribe(Box::new(move |_: Viewport| {
            if let Some(mut sub) = slot.borrow_mut().take() {
                sub.cancel();
            }
        }));
        let sink = Rc::clone(&seen);
        *later.borrow_mut() =
            Some(surface.subscribe(Box::new(move |vp: Viewport| sink.borrow_mut().push(vp.width))));

        surface.resize(Viewport::new(500, 500));

        assert!(seen.borrow().is_empty());
        assert_eq!(surface.listener_count(), 1);
        assert_eq!(surface.release_count(), 1);
    }

    #[test]
    fn resize_from_listener_is_queued() {
        let surface = ManualSurface::new(Viewport::ZERO);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handle = surface.clone();
        let sink = Rc::clone(&seen);
        let _sub = surface.subscribe(Box::new(move |vp: Viewport| {
            sink.borrow_mut().push(vp.width);
            if vp.width == 100 {
                handle.resize(Viewport::new(200, 100));
                // not delivered yet
                assert_eq!(sink.borrow().len(), 1);
            }
        }));

        surface.resize(Viewport::new(100, 100));

        assert_eq!(*seen.borrow(), vec![100, 200]);
        assert_eq!(surface.viewport(), Some(Viewport::new(200, 100)));
    }

    #[test]
    fn headless_surface_has_no_size() {
        let surface = HeadlessSurface;
        assert_eq!(surface.viewport(), None);
        assert!(!surface.subscribe(Box::new(|_: Viewport| {})).is_active());
    }
}
