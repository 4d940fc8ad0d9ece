use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::StoreError;
use crate::listeners::{Listeners, Subscription};

type Reducer<S, A> = Box<dyn Fn(&S, &A) -> S>;

struct Inner<S, A> {
    state: RefCell<S>,
    reducer: Reducer<S, A>,
    listeners: Rc<RefCell<Listeners>>,
    reducing: Cell<bool>,
    reading: Cell<usize>,
}

/// Store - holds the current state and runs the dispatch loop
///
/// The Store follows the Redux pattern:
/// - One state value, replaced wholesale on every dispatch
/// - A pure reducer computes the next state from the current state and an action
/// - Listeners are notified synchronously, in registration order, after the
///   state has been replaced
///
/// `Store` is a handle: clones share the same state and listeners, which lets
/// a listener capture a clone and call [`Store::get_state`] when notified.
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Store<S, A> {
    /// Create a store whose initial state is `S::default()`
    ///
    /// The default value stands for what the reducer produces when called
    /// without a previous state.
    pub fn new<R>(reducer: R) -> Self
    where
        S: Default,
        R: Fn(&S, &A) -> S + 'static,
    {
        Self::with_state(S::default(), reducer)
    }

    /// Create a store with an explicit initial state
    pub fn with_state<R>(initial_state: S, reducer: R) -> Self
    where
        R: Fn(&S, &A) -> S + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial_state),
                reducer: Box::new(reducer),
                listeners: Rc::new(RefCell::new(Listeners::default())),
                reducing: Cell::new(false),
                reading: Cell::new(0),
            }),
        }
    }

    /// Get the current state
    pub fn get_state(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without cloning it
    ///
    /// The state stays borrowed while `read` runs: a `dispatch` from inside
    /// it returns [`StoreError::DispatchWhileReading`].
    pub fn with_state_ref<T>(&self, read: impl FnOnce(&S) -> T) -> T {
        let _guard = ReadingGuard::enter(&self.inner.reading);
        read(&self.inner.state.borrow())
    }

    /// Register a listener, called with no arguments after every dispatch
    ///
    /// Registering the same closure twice registers it twice.
    pub fn subscribe<L>(&self, listener: L) -> Subscription
    where
        L: Fn() + 'static,
    {
        let id = self.inner.listeners.borrow_mut().add(Rc::new(listener));
        log::debug!("Subscribed {}", id);
        Subscription::new(id, Rc::downgrade(&self.inner.listeners))
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Apply an action through the reducer, then notify listeners
    ///
    /// The state is replaced only after the reducer returns, so a panicking
    /// reducer leaves it untouched. Listeners are snapshotted before the
    /// first one runs: a listener that subscribes or unsubscribes affects
    /// the next dispatch, not the current one. A panicking listener stops
    /// the remaining notifications.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError>
    where
        A: fmt::Debug,
    {
        if self.inner.reducing.get() {
            log::warn!("Rejected dispatch from inside reducer: {:?}", action);
            return Err(StoreError::DispatchInReducer);
        }
        if self.inner.reading.get() > 0 {
            log::warn!("Rejected dispatch while state is borrowed: {:?}", action);
            return Err(StoreError::DispatchWhileReading);
        }
        log::trace!("Action: {:?}", action);

        let next_state = {
            let _guard = ReducingGuard::enter(&self.inner.reducing);
            let current = self.inner.state.borrow();
            (self.inner.reducer)(&current, &action)
        };
        *self.inner.state.borrow_mut() = next_state;

        let listeners = self.inner.listeners.borrow().snapshot();
        for listener in listeners {
            listener();
        }

        Ok(())
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Marks the store as reducing; cleared on drop so a panicking reducer
/// does not lock the store.
struct ReducingGuard<'a>(&'a Cell<bool>);

impl<'a> ReducingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ReducingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Counts open `with_state_ref` borrows, which may nest
struct ReadingGuard<'a>(&'a Cell<usize>);

impl<'a> ReadingGuard<'a> {
    fn enter(depth: &'a Cell<usize>) -> Self {
        depth.set(depth.get() + 1);
        Self(depth)
    }
}

impl Drop for ReadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}
