//! Todo and goal lists on top of `redux-store`
//!
//! ```text
//! Action → app_reducer (todo_reducer + goal_reducer) → AppState → listeners
//! ```

pub mod actions;
pub mod config;
pub mod demo;
pub mod domain_models;
pub mod error;
pub mod logger;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::{Action, ActionKind};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use state::AppState;
pub use store::{create_store, AppStore};
