//! Win/lose/tie structure of symmetric cyclic-dominance games.

use super::{
    action::{self, ActionId, ActionSpace},
    error::{invalid, Result},
};
use serde::{Deserialize, Serialize};

/// Payoff of each of my actions against one realized opponent action.
pub type Utility = Vec<f64>;

/// Generalized rock-paper-scissors over `N` actions.
///
/// Action `a` beats `o` iff `(a - o) mod N` lies in `1..=(N-1)/2`, so every
/// action beats exactly half of the others and loses to the other half.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub struct DominanceRelation {
    num_actions: usize,
}

impl DominanceRelation {
    pub fn new(num_actions: usize) -> Result<Self> {
        action::validate_num_actions(num_actions)?;
        Ok(DominanceRelation { num_actions })
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn beats(&self, a: ActionId, o: ActionId) -> bool {
        let n = self.num_actions;
        let offset = (a.index() + n - o.index()) % n;
        offset >= 1 && offset <= (n - 1) / 2
    }

    /// Payoff to the player choosing `a` when the other side plays `o`.
    pub fn payoff(&self, a: ActionId, o: ActionId) -> f64 {
        if self.beats(a, o) {
            1.0
        } else if self.beats(o, a) {
            -1.0
        } else {
            0.0
        }
    }

    pub fn utility_for(&self, opponent_action: ActionId) -> Utility {
        (0..self.num_actions)
            .map(|a| self.payoff(ActionId::new(a), opponent_action))
            .collect()
    }

    /// Payoff of `my_action` against each possible opponent action.
    pub fn payoff_row(&self, my_action: ActionId) -> Utility {
        (0..self.num_actions)
            .map(|o| self.payoff(my_action, ActionId::new(o)))
            .collect()
    }
}

/// A playable game: labeled actions plus the dominance relation over them.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Rule {
    pub actions: ActionSpace,
    pub dominance: DominanceRelation,
}

impl Rule {
    pub fn new(actions: ActionSpace) -> Result<Self> {
        let dominance = DominanceRelation::new(actions.len())?;
        Ok(Rule { actions, dominance })
    }

    pub fn num_actions(&self) -> usize {
        self.dominance.num_actions()
    }
}

pub fn indexed(num_actions: usize) -> Result<Rule> {
    Rule::new(ActionSpace::indexed(num_actions)?)
}

pub fn from_name(rule_name: &str) -> Result<Rule> {
    trace!("start: from_name({})", rule_name);
    match rule_name {
        "rps" => Rule::new(ActionSpace::new(&["Rock", "Paper", "Scissors"])?),
        // ordered around the cycle so the general rule yields the classic table
        "rpsls" => Rule::new(ActionSpace::new(&[
            "Rock", "Spock", "Paper", "Lizard", "Scissors",
        ])?),
        _ => invalid(format!("invalid rule name: {}", rule_name)),
    }
}
