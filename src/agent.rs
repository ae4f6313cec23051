//! One participant's regret-matching state.

use super::{
    action::ActionId,
    rule::Utility,
    strategy::{self, Strategy},
};
use serde::{Deserialize, Serialize};

/// Cumulative regret and cumulative strategy of a single player.
///
/// Deriving a strategy and counting it towards the average are separate
/// steps (`regret_matching_strategy` and `observe`); `current_strategy`
/// performs both, which is what the training loop uses.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct RegretAgent {
    regret_sum: Vec<f64>,
    strategy_sum: Vec<f64>,
}

impl RegretAgent {
    pub fn new(num_actions: usize) -> Self {
        RegretAgent {
            regret_sum: strategy::zeros(num_actions),
            strategy_sum: strategy::zeros(num_actions),
        }
    }

    pub fn num_actions(&self) -> usize {
        self.regret_sum.len()
    }

    pub fn regret_sum(&self) -> &[f64] {
        &self.regret_sum
    }

    pub fn strategy_sum(&self) -> &[f64] {
        &self.strategy_sum
    }

    /// Regret matching: the positive part of cumulative regret, normalized,
    /// uniform when no action has positive regret. Does not touch the average.
    ///
    /// Positive regret totalling less than `1e-9` counts as none, so e.g.
    /// `[5e-10, -1, -1]` also yields the uniform distribution.
    pub fn regret_matching_strategy(&self) -> Strategy {
        strategy::normalized(strategy::positive_part(&self.regret_sum))
    }

    /// Counts `strt` towards the average strategy.
    pub fn observe(&mut self, strt: &[f64]) {
        for (sum, prob) in self.strategy_sum.iter_mut().zip(strt) {
            *sum += prob;
        }
    }

    pub fn current_strategy(&mut self) -> Strategy {
        let strt = self.regret_matching_strategy();
        self.observe(&strt);
        strt
    }

    /// `regret[a] += utility[a] - utility[my_action] + offset` for every `a`.
    pub fn accumulate_regret(&mut self, my_action: ActionId, utility: &[f64], offset: f64) {
        let realized = utility[my_action.index()];
        for (regret, util) in self.regret_sum.iter_mut().zip(utility) {
            *regret += util - realized + offset;
        }
    }

    pub fn average_strategy(&self) -> Strategy {
        strategy::normalized(self.strategy_sum.clone())
    }
}

/// Negates a utility vector, turning one side's payoffs into the other's.
pub fn negated(utility: &[f64]) -> Utility {
    utility.iter().map(|u| -u).collect()
}
