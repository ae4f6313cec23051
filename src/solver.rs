//! Evaluation of strategies: expected payoff, best response, exploitability.

use super::{
    action::ActionId,
    player::Player,
    profile::Profile,
    rule::DominanceRelation,
    strategy::Strategy,
};
use ord_subset::OrdSubsetIterExt;

/// Expected payoff to the player using `strt1` when the other plays `strt2`.
pub fn calc_ev(rel: &DominanceRelation, strt1: &[f64], strt2: &[f64]) -> f64 {
    strt2
        .iter()
        .enumerate()
        .map(|(o, prob)| {
            let util = rel.utility_for(ActionId::new(o));
            prob * strt1.iter().zip(util).map(|(p, u)| p * u).sum::<f64>()
        })
        .sum()
}

/// Expected payoff to `player` when both seats play their profile strategies.
pub fn calc_ev_of(rel: &DominanceRelation, prof: &Profile, player: &Player) -> f64 {
    match (prof.get(&Player::P1), prof.get(&Player::P2)) {
        (Some(strt1), Some(strt2)) => player.sign() * calc_ev(rel, strt1, strt2),
        _ => 0.0,
    }
}

/// Expected payoff of each pure action against `strt`.
pub fn action_values(rel: &DominanceRelation, strt: &[f64]) -> Vec<f64> {
    (0..rel.num_actions())
        .map(|a| {
            rel.payoff_row(ActionId::new(a))
                .iter()
                .zip(strt)
                .map(|(u, prob)| u * prob)
                .sum::<f64>()
        })
        .collect()
}

pub fn best_resp_action(rel: &DominanceRelation, strt: &[f64]) -> ActionId {
    let values = action_values(rel, strt);
    let best = (0..values.len())
        .ord_subset_max_by_key(|a| values[*a])
        .unwrap_or(0);
    ActionId::new(best)
}

/// Payoff the best pure response achieves against `strt`.
pub fn calc_best_resp(rel: &DominanceRelation, strt: &[f64]) -> f64 {
    let values = action_values(rel, strt);
    values[best_resp_action(rel, strt).index()]
}

/// Total gain both players could obtain by deviating to a best response.
///
/// Zero exactly at a Nash equilibrium, positive otherwise.
pub fn calc_exploitability(rel: &DominanceRelation, prof: &Profile) -> f64 {
    [Player::P1, Player::P2]
        .iter()
        .filter_map(|player| {
            prof.get(&player.opponent())
                .map(|opp_strt| calc_best_resp(rel, opp_strt) - calc_ev_of(rel, prof, player))
        })
        .sum()
}

/// Exploitability of a strategy used by both seats of the symmetric game.
pub fn calc_symmetric_exploitability(rel: &DominanceRelation, strt: &Strategy) -> f64 {
    2.0 * calc_best_resp(rel, strt)
}
