use crate::actions::Action;
use crate::reducers::{goal_reducer, todo_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
///
/// The returned state is always a freshly built value, even when neither
/// slice changed; compare slices with [`AppState::todos_changed`] and
/// [`AppState::goals_changed`] to skip per-slice work.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        todos: todo_reducer::reduce(&state.todos, action),
        goals: goal_reducer::reduce(&state.goals, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Goal, GoalId, Todo, TodoId};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_todo_action_only_replaces_todo_slice() {
        let state = AppState::default();

        let next = reduce(&state, &Action::add_todo(Todo::new(0, "x")));

        assert!(next.todos_changed(&state));
        assert!(!next.goals_changed(&state));
    }

    #[test]
    fn test_goal_action_only_replaces_goal_slice() {
        let state = AppState::default();

        let next = reduce(&state, &Action::add_goal(Goal::new(0, "g")));

        assert!(!next.todos_changed(&state));
        assert!(next.goals_changed(&state));
    }

    #[test]
    fn test_matches_left_fold_of_sub_reducers() {
        let actions = vec![
            Action::add_todo(Todo::new(0, "Learn Redux")),
            Action::add_todo(Todo::new(1, "Redux class 2")),
            Action::toggle_todo(TodoId::new(0)),
            Action::add_goal(Goal::new(0, "Do stuff")),
            Action::remove_goal(GoalId::new(0)),
        ];

        let state = actions
            .iter()
            .fold(AppState::default(), |state, action| reduce(&state, action));

        let mut learn = Todo::new(0, "Learn Redux");
        learn.complete = true;
        let expected = AppState {
            todos: Arc::new(vec![
                Arc::new(learn),
                Arc::new(Todo::new(1, "Redux class 2")),
            ]),
            goals: Arc::new(Vec::new()),
        };
        assert_eq!(state, expected);
    }
}
