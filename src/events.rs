//! Listener bookkeeping with scoped release.
//!
//! Sections register a [`ListenerGuard`] for every input stream they consume. The page only routes
//! an input kind to sections that hold a live guard for it, and dropping a section drops its
//! guards, so teardown is complete on every exit path.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

/// Input or callback stream a component can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    /// Document scroll.
    Scroll,
    /// Viewport resize.
    Resize,
    /// Pointer movement.
    Pointer,
    /// Per-frame callback.
    Frame,
    /// Fixed-interval timer.
    Interval,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: BTreeMap<u64, (ListenerKind, &'static str)>,
}

/// Shared listener registry. Cloning yields another handle to the same registry.
#[derive(Clone, Debug, Default)]
pub struct EventHub {
    inner: Rc<RefCell<Registry>>,
}

impl EventHub {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener of `kind` owned by `owner`. Unregistered when the guard drops.
    pub fn listen(&self, kind: ListenerKind, owner: &'static str) -> ListenerGuard {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.live.insert(id, (kind, owner));
        tracing::trace!(id, ?kind, owner, "listener registered");
        ListenerGuard {
            registry: Rc::downgrade(&self.inner),
            id,
            kind,
        }
    }

    /// Live listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .live
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Live listeners of any kind.
    pub fn total(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// Return `true` when `owner` holds a live listener of `kind`.
    pub fn is_listening(&self, owner: &str, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .live
            .values()
            .any(|(k, o)| *k == kind && *o == owner)
    }
}

/// Registration handle; unregisters on drop.
#[derive(Debug)]
#[must_use = "dropping the guard unregisters the listener immediately"]
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: u64,
    kind: ListenerKind,
}

impl ListenerGuard {
    /// Stream this guard is registered for.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().live.remove(&self.id);
            tracing::trace!(id = self.id, kind = ?self.kind, "listener released");
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/events.rs"]
mod tests;
