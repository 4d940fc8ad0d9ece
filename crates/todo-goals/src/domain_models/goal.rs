//! Goal model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for goal ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(u64);

impl GoalId {
    pub fn new(value: u64) -> Self {
        GoalId(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
}

impl Goal {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: GoalId(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_json_shape() {
        let goal: Goal = serde_json::from_str(r#"{"id": 4, "name": "Lose 10 kg"}"#).unwrap();
        assert_eq!(goal, Goal::new(4, "Lose 10 kg"));
        assert_eq!(goal.id.value(), 4);
        assert_eq!(goal.id.to_string(), "#4");
    }
}
