use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain_models::{Goal, Todo};

/// Todo list slice. Items are shared so untouched todos keep their identity
/// across dispatches.
pub type Todos = Arc<Vec<Arc<Todo>>>;

/// Goal list slice
pub type Goals = Arc<Vec<Arc<Goal>>>;

/// Application state - one slice per sub-reducer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub todos: Todos,
    pub goals: Goals,
}

impl AppState {
    /// Whether the todo slice was replaced since `previous`
    pub fn todos_changed(&self, previous: &AppState) -> bool {
        !Arc::ptr_eq(&self.todos, &previous.todos)
    }

    /// Whether the goal slice was replaced since `previous`
    pub fn goals_changed(&self, previous: &AppState) -> bool {
        !Arc::ptr_eq(&self.goals, &previous.goals)
    }

    /// Todos still open
    pub fn open_todos(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().map(Arc::as_ref).filter(|todo| !todo.complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let state = AppState::default();
        assert!(state.todos.is_empty());
        assert!(state.goals.is_empty());
    }

    #[test]
    fn test_change_detection_uses_identity() {
        let state = AppState::default();
        let cloned = state.clone();
        assert!(!cloned.todos_changed(&state));
        assert!(!cloned.goals_changed(&state));

        let rebuilt = AppState {
            todos: Arc::new(Vec::new()),
            goals: Arc::clone(&state.goals),
        };
        // equal by value, but a different slice
        assert_eq!(rebuilt, state);
        assert!(rebuilt.todos_changed(&state));
        assert!(!rebuilt.goals_changed(&state));
    }

    #[test]
    fn test_open_todos() {
        let mut done = Todo::new(1, "done");
        done.complete = true;
        let state = AppState {
            todos: Arc::new(vec![Arc::new(Todo::new(0, "open")), Arc::new(done)]),
            goals: Goals::default(),
        };

        let open: Vec<&str> = state.open_todos().map(|todo| todo.name.as_str()).collect();
        assert_eq!(open, vec!["open"]);
    }

    #[test]
    fn test_state_json_shape() {
        let state = AppState {
            todos: Arc::new(vec![Arc::new(Todo::new(0, "x"))]),
            goals: Goals::default(),
        };
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"todos":[{"id":0,"name":"x","complete":false}],"goals":[]}"#
        );
    }
}
