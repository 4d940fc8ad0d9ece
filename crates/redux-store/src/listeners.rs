//! Listener registry and subscription handles

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked after every successful dispatch
pub(crate) type Listener = Rc<dyn Fn()>;

/// Identity of one registration in a store's listener list.
///
/// Subscribing the same closure twice yields two different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Ordered listener list, in registration order
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove the registration with this id, returns false if it was already gone
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Copy of the current list, so callbacks can subscribe/unsubscribe freely
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Capability returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Dropping it keeps the listener registered; call [`Subscription::unsubscribe`]
/// to remove it.
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, listeners: Weak<RefCell<Listeners>>) -> Self {
        Self { id, listeners }
    }

    /// The registration this handle removes
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove exactly this registration from the store.
    ///
    /// Returns `true` if the listener was removed by this call. Calling it
    /// again, or after the store is gone, is a no-op returning `false`.
    pub fn unsubscribe(&self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let removed = listeners.borrow_mut().remove(self.id);
        if removed {
            log::debug!("Unsubscribed {}", self.id);
        }
        removed
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
