//! Todo Reducer

use std::sync::Arc;

use crate::actions::Action;
use crate::state::Todos;

/// Reduce the todo list slice
pub fn reduce(state: &Todos, action: &Action) -> Todos {
    match action {
        Action::AddTodo { todo } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend(state.iter().cloned());
            next.push(Arc::new(todo.clone()));
            Arc::new(next)
        }
        Action::RemoveTodo { id } => Arc::new(
            state
                .iter()
                .filter(|todo| todo.id != *id)
                .cloned()
                .collect(),
        ),
        Action::ToggleTodo { id } => Arc::new(
            state
                .iter()
                .map(|todo| {
                    if todo.id == *id {
                        log::debug!("Toggling todo {}", id);
                        Arc::new(todo.toggled())
                    } else {
                        Arc::clone(todo)
                    }
                })
                .collect(),
        ),
        _ => Arc::clone(state),
    }
}
