//! Actions module
//!
//! Every state change in the application is described by an [`Action`].
//! Actions serialize as plain records tagged by their kind:
//!
//! ```json
//! { "type": "ADD_TODO", "todo": { "id": 0, "name": "Learn Redux", "complete": false } }
//! { "type": "REMOVE_GOAL", "id": 0 }
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::domain_models::{Goal, GoalId, Todo, TodoId};

/// Root action enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a todo to the list
    AddTodo { todo: Todo },
    /// Remove every todo with this id
    RemoveTodo { id: TodoId },
    /// Flip `complete` on the todo with this id
    ToggleTodo { id: TodoId },
    /// Append a goal to the list
    AddGoal { goal: Goal },
    /// Remove every goal with this id
    RemoveGoal { id: GoalId },
}

/// Discriminant of an [`Action`], spelled the way it appears in action records
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    AddTodo,
    RemoveTodo,
    ToggleTodo,
    AddGoal,
    RemoveGoal,
}

impl ActionKind {
    /// The record tag, e.g. `"ADD_TODO"`
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

// Action creators
impl Action {
    pub fn add_todo(todo: Todo) -> Self {
        Self::AddTodo { todo }
    }

    pub fn remove_todo(id: TodoId) -> Self {
        Self::RemoveTodo { id }
    }

    pub fn toggle_todo(id: TodoId) -> Self {
        Self::ToggleTodo { id }
    }

    pub fn add_goal(goal: Goal) -> Self {
        Self::AddGoal { goal }
    }

    pub fn remove_goal(id: GoalId) -> Self {
        Self::RemoveGoal { id }
    }

    /// Which kind of action this is
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::AddTodo { .. } => ActionKind::AddTodo,
            Self::RemoveTodo { .. } => ActionKind::RemoveTodo,
            Self::ToggleTodo { .. } => ActionKind::ToggleTodo,
            Self::AddGoal { .. } => ActionKind::AddGoal,
            Self::RemoveGoal { .. } => ActionKind::RemoveGoal,
        }
    }
}
