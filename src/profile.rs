use super::{
    error::{invalid, Result},
    player::Player,
    strategy::{self, Strategy},
};
use std::collections::BTreeMap;

pub type Profile = BTreeMap<Player, Strategy>;

pub fn from_json(json: &str) -> Result<Profile> {
    let prof: Profile = serde_json::from_str(json)?;
    Ok(prof)
}

pub fn uniform(num_actions: usize) -> Profile {
    vec![
        (Player::P1, strategy::uniform(num_actions)),
        (Player::P2, strategy::uniform(num_actions)),
    ]
    .into_iter()
    .collect()
}

pub fn from_strt(a: &Player, a_strt: Strategy, b: &Player, b_strt: Strategy) -> Result<Profile> {
    if *a == *b {
        return invalid("a profile needs one strategy per player");
    }
    if a_strt.len() != b_strt.len() {
        return invalid(format!(
            "players disagree on the action count: {} vs {}",
            a_strt.len(),
            b_strt.len()
        ));
    }
    Ok(vec![(*a, a_strt), (*b, b_strt)].into_iter().collect())
}
