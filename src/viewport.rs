//! The shared viewport-size signal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::media::{probe_viewport, Environment};

/// The host's viewport-size signal, the one resource shared between layers.
///
/// Media layers read the current measurement when they mount and hold a
/// scoped [`ResizeSubscription`] for as long as they stay mounted. The host
/// adapter records new widths with [`Viewport::set_width`] and forwards the
/// matching [`Event::Resize`](crate::Event::Resize) to mounted stacks; the
/// signal itself holds no lock across dispatch.
///
/// Reads are independent, so subscribers need no coordination beyond their
/// own registration.
#[derive(Debug, Clone)]
pub struct Viewport {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug)]
struct Inner {
    env: Environment,
    next_subscriber: u64,
    subscribers: Vec<u64>,
}

impl Viewport {
    /// A viewport pinned at the given environment.
    pub fn new(env: Environment) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                env,
                next_subscriber: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// A viewport initialized from the global measurement probe.
    pub fn measure() -> Self {
        Self::new(probe_viewport())
    }

    /// The current measurement.
    pub fn current(&self) -> Environment {
        self.inner.borrow().env
    }

    /// Records a new width from the host's resize notification.
    pub fn set_width(&self, width: u32) {
        self.inner.borrow_mut().env.width = width;
    }

    /// Registers interest in resize notifications; released when the
    /// returned guard drops.
    pub fn subscribe(&self) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push(id);
        ResizeSubscription {
            viewport: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::measure()
    }
}

/// Scoped registration with a [`Viewport`]; deregisters on drop, so a layer
/// dropping its guard releases the subscription on every exit path.
#[derive(Debug)]
pub struct ResizeSubscription {
    viewport: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.viewport.upgrade() {
            inner.borrow_mut().subscribers.retain(|id| *id != self.id);
        }
    }
}
