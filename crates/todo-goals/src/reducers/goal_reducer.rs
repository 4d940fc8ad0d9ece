//! Goal Reducer

use std::sync::Arc;

use crate::actions::Action;
use crate::state::Goals;

/// Reduce the goal list slice
pub fn reduce(state: &Goals, action: &Action) -> Goals {
    match action {
        Action::AddGoal { goal } => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend(state.iter().cloned());
            next.push(Arc::new(goal.clone()));
            Arc::new(next)
        }
        Action::RemoveGoal { id } => Arc::new(
            state
                .iter()
                .filter(|goal| goal.id != *id)
                .cloned()
                .collect(),
        ),
        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Goal, GoalId, Todo, TodoId};

    #[test]
    fn test_add_and_remove_goal() {
        let empty = Goals::default();

        let added = reduce(&empty, &Action::add_goal(Goal::new(1, "g")));
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, "g");

        let removed = reduce(&added, &Action::remove_goal(GoalId::new(1)));
        assert!(removed.is_empty());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_drops_every_matching_id() {
        let state: Goals = Arc::new(vec![
            Arc::new(Goal::new(0, "Do stuff")),
            Arc::new(Goal::new(1, "Learn Redux")),
            Arc::new(Goal::new(0, "Lose 10 kg")),
        ]);

        let after = reduce(&state, &Action::remove_goal(GoalId::new(0)));

        assert_eq!(after.len(), 1);
        assert_eq!(after[0].name, "Learn Redux");
    }

    #[test]
    fn test_todo_actions_return_same_slice() {
        let state: Goals = Arc::new(vec![Arc::new(Goal::new(0, "g"))]);

        for action in [
            Action::add_todo(Todo::new(0, "t")),
            Action::remove_todo(TodoId::new(0)),
            Action::toggle_todo(TodoId::new(0)),
        ] {
            assert!(Arc::ptr_eq(&state, &reduce(&state, &action)));
        }
    }
}
