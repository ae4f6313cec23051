use super::{
    action::ActionId,
    error::{invalid, Result},
};
use rand::Rng;
use std::fs;

/// Probability of playing each action, indexed by `ActionId`.
pub type Strategy = Vec<f64>;

/// Allowed deviation of a supplied distribution's total from 1.
pub const TOLERANCE: f64 = 1e-6;

pub fn zeros(num_actions: usize) -> Strategy {
    filled_with(num_actions, 0.0)
}

pub fn filled_with(num_actions: usize, prob: f64) -> Strategy {
    vec![prob; num_actions]
}

pub fn uniform(num_actions: usize) -> Strategy {
    filled_with(num_actions, 1.0 / num_actions as f64)
}

/// Point mass on a single action.
pub fn pure(num_actions: usize, action_id: ActionId) -> Strategy {
    let mut strt = zeros(num_actions);
    strt[action_id.index()] = 1.0;
    strt
}

pub fn positive_part(v: &[f64]) -> Vec<f64> {
    v.iter().map(|&x| if x < 0.0 { 0.0 } else { x }).collect()
}

/// Scales `v` to sum to 1, or returns the uniform distribution if there is
/// no mass to scale.
pub fn normalized(v: Vec<f64>) -> Strategy {
    let norm: f64 = v.iter().sum();
    if norm < 1e-9 {
        uniform(v.len())
    } else {
        v.into_iter().map(|x| x / norm).collect()
    }
}

/// Draws an action: the first whose cumulative probability exceeds a uniform
/// `r` in `[0, 1)`, or the last action if rounding leaves the total short.
pub fn sample_action<R: Rng>(strt: &[f64], rng: &mut R) -> ActionId {
    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, prob) in strt.iter().enumerate() {
        cumulative += prob;
        if r < cumulative {
            return ActionId::new(i);
        }
    }
    ActionId::new(strt.len() - 1)
}

pub fn validate(strt: &[f64], num_actions: usize) -> Result<()> {
    if strt.len() != num_actions {
        return invalid(format!(
            "strategy has {} entries but the game has {} actions",
            strt.len(),
            num_actions
        ));
    }
    if let Some(prob) = strt.iter().find(|prob| !prob.is_finite() || **prob < 0.0) {
        return invalid(format!("strategy entry {} is not a probability", prob));
    }
    let total: f64 = strt.iter().sum();
    if (total - 1.0).abs() > TOLERANCE {
        return invalid(format!("strategy sums to {}, expected 1", total));
    }
    Ok(())
}

pub fn from_json(json: &str) -> Result<Strategy> {
    let strt: Strategy = serde_json::from_str(json)?;
    Ok(strt)
}

pub fn from_file(path: &str) -> Result<Strategy> {
    from_json(&fs::read_to_string(path)?)
}
