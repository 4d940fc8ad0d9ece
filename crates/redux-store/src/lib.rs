//! Minimal unidirectional state container
//!
//! A [`Store`] owns exactly one state value, the reducer that derives the next
//! state from an action, and an ordered list of change listeners.
//!
//! ```text
//! Action → Reducer → State → Listeners
//! ```
//!
//! ## Example
//!
//! ```rust
//! use redux_store::Store;
//!
//! let store = Store::new(|count: &i64, delta: &i64| count + delta);
//!
//! let reader = store.clone();
//! let subscription = store.subscribe(move || {
//!     println!("count is now {}", reader.get_state());
//! });
//!
//! store.dispatch(2).unwrap();
//! assert_eq!(store.get_state(), 2);
//!
//! subscription.unsubscribe();
//! ```

mod error;
mod listeners;
mod store;

pub use error::StoreError;
pub use listeners::{ListenerId, Subscription};
pub use store::Store;
