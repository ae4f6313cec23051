//! Regret matching for rock-paper-scissors style games
//! # Example
//! ```
//! use rps_cfr::*;
//! let rule = rule::from_name("rps").unwrap();
//!
//! let config = cfr::TrainerConfig::self_play(rule.num_actions()).with_seed(42);
//! let step = 1000;
//! let res = cfr::train(config, step).unwrap();
//! println!("{}", visualizer::format_dist(&rule.actions, &res.agent));
//! ```
#[macro_use]
extern crate log;

pub mod action;
pub mod error;
pub mod player;
pub mod profile;
pub mod rule;
pub mod strategy;

pub mod agent;
pub mod cfr;
pub mod solver;
pub mod visualizer;

pub use error::{Error, Result};
