//! Domain models
//!
//! Plain data items stored in the todo and goal lists.

mod goal;
mod todo;

pub use goal::{Goal, GoalId};
pub use todo::{Todo, TodoId};
