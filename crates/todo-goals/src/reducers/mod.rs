//! Reducers
//!
//! Pure functions producing the next state slice from the current one and an
//! action. Sub-reducers hand back the same `Arc` for actions they don't handle.

pub mod app_reducer;
pub mod goal_reducer;
pub mod todo_reducer;
