use super::{
    action::ActionSpace,
    cfr::History,
    player::Player,
    profile::Profile,
};

/// Digits kept when printing probabilities.
pub const ROUND_VALUE: usize = 7;

pub fn format_dist(actions: &ActionSpace, dist: &[f64]) -> String {
    actions
        .iter()
        .zip(dist)
        .map(|((_, action), prob)| format!("{}: {:.*}", action, ROUND_VALUE, prob))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_percentages(actions: &ActionSpace, dist: &[f64]) -> String {
    actions
        .iter()
        .zip(dist)
        .map(|((_, action), prob)| format!("{}: {:.1}%", action, prob * 100.0))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_dist(actions: &ActionSpace, dist: &[f64]) {
    println!("{{");
    for ((_, action), prob) in actions.iter().zip(dist) {
        println!("    {}: {}", action, prob);
    }
    print!("  }}");
}

pub fn print_prof(actions: &ActionSpace, prof: &Profile) {
    for player in [Player::P1, Player::P2].iter() {
        if let Some(strt) = prof.get(player) {
            print!("{:?}: ", player);
            print_dist(actions, strt);
            println!(",");
        }
    }
}

/// Tab separated table: iteration, one column per action, exploitability.
pub fn format_history(actions: &ActionSpace, history: &History) -> String {
    let header = std::iter::once(String::from("iteration"))
        .chain(actions.iter().map(|(_, action)| action.to_string()))
        .chain(std::iter::once(String::from("exploitability")))
        .collect::<Vec<_>>()
        .join("\t");
    let rows = history.snapshots.iter().map(|snapshot| {
        std::iter::once(snapshot.iteration.to_string())
            .chain(snapshot.agent.iter().map(|prob| format!("{:.6}", prob)))
            .chain(std::iter::once(format!("{:.6}", snapshot.exploitability)))
            .collect::<Vec<_>>()
            .join("\t")
    });
    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
