use super::error::{invalid, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ActionId(usize);

impl ActionId {
    pub fn new(id: usize) -> Self {
        ActionId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Action(String);

impl Action {
    pub fn new(action: &str) -> Self {
        Action(String::from(action))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, labeled actions of a cyclic-dominance game.
///
/// The engine only ever looks at indices; labels exist for reporting.
/// The action count is odd and at least 3.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct ActionSpace {
    actions: Vec<Action>,
}

impl ActionSpace {
    pub fn new(labels: &[&str]) -> Result<Self> {
        validate_num_actions(labels.len())?;
        Ok(ActionSpace {
            actions: labels.iter().map(|label| Action::new(label)).collect(),
        })
    }

    /// Unlabeled space, actions are named by their index.
    pub fn indexed(num_actions: usize) -> Result<Self> {
        validate_num_actions(num_actions)?;
        Ok(ActionSpace {
            actions: (0..num_actions)
                .map(|i| Action::new(&format!("Action{}", i)))
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.actions.len()).map(ActionId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| (ActionId::new(i), action))
    }
}

pub fn validate_num_actions(num_actions: usize) -> Result<()> {
    if num_actions < 3 {
        return invalid(format!(
            "action count must be at least 3, got {}",
            num_actions
        ));
    }
    if num_actions % 2 == 0 {
        return invalid(format!("action count must be odd, got {}", num_actions));
    }
    Ok(())
}
