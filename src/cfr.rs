//! Provide regret-matching training loops.

use super::{
    action::{self, ActionId},
    agent::{self, RegretAgent},
    error::{invalid, Result},
    player::Player,
    profile::{self, Profile},
    rule::DominanceRelation,
    solver,
    strategy::{self, Strategy},
};
use indicatif::{ProgressBar, ProgressIterator};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;

/// Regret bonus added per action when training against a fixed opponent.
pub const FIXED_OPPONENT_OFFSET: f64 = 0.1;

/// Who the agent plays against.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub enum OpponentModel {
    /// A static distribution that never learns.
    Fixed(Strategy),
    /// A second regret-matching agent trained from the same outcomes.
    SelfPlay,
}

#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct TrainerConfig {
    pub num_actions: usize,
    pub opponent: OpponentModel,
    #[serde(default)]
    pub regret_offset: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub snapshot_stride: Option<usize>,
    #[serde(default)]
    pub show_progress: bool,
}

impl TrainerConfig {
    pub fn fixed(num_actions: usize, opp_strt: Strategy) -> Self {
        TrainerConfig {
            num_actions,
            opponent: OpponentModel::Fixed(opp_strt),
            regret_offset: None,
            seed: None,
            snapshot_stride: None,
            show_progress: false,
        }
    }

    pub fn self_play(num_actions: usize) -> Self {
        TrainerConfig {
            opponent: OpponentModel::SelfPlay,
            ..TrainerConfig::fixed(num_actions, Vec::new())
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_snapshot_stride(mut self, stride: usize) -> Self {
        self.snapshot_stride = Some(stride);
        self
    }

    pub fn with_regret_offset(mut self, offset: f64) -> Self {
        self.regret_offset = Some(offset);
        self
    }

    /// Offset applied in `RegretAgent::accumulate_regret`: 0.1 against a fixed
    /// opponent, 0 in self-play, unless set explicitly.
    pub fn regret_offset(&self) -> f64 {
        self.regret_offset.unwrap_or(match self.opponent {
            OpponentModel::Fixed(_) => FIXED_OPPONENT_OFFSET,
            OpponentModel::SelfPlay => 0.0,
        })
    }

    pub fn validate(&self) -> Result<()> {
        action::validate_num_actions(self.num_actions)?;
        if let OpponentModel::Fixed(opp_strt) = &self.opponent {
            strategy::validate(opp_strt, self.num_actions)?;
        }
        if let Some(offset) = self.regret_offset {
            if !offset.is_finite() {
                return invalid(format!("regret offset must be finite, got {}", offset));
            }
        }
        if self.snapshot_stride == Some(0) {
            return invalid("snapshot stride must be positive");
        }
        Ok(())
    }
}

pub fn from_json(json: &str) -> Result<TrainerConfig> {
    let config: TrainerConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn from_file(path: &str) -> Result<TrainerConfig> {
    from_json(&fs::read_to_string(path)?)
}

/// Average strategies recorded at one iteration.
#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct Snapshot {
    pub iteration: usize,
    pub agent: Strategy,
    pub opponent: Strategy,
    /// Agent's expected payoff against `opponent`.
    pub value: f64,
    pub exploitability: f64,
}

#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Debug)]
pub struct History {
    pub stride: usize,
    pub snapshots: Vec<Snapshot>,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Probability the agent's average strategy assigned to `action_id` over time.
    pub fn series(&self, action_id: ActionId) -> Vec<(usize, f64)> {
        self.snapshots
            .iter()
            .map(|snapshot| (snapshot.iteration, snapshot.agent[action_id.index()]))
            .collect()
    }
}

#[derive(Clone, Deserialize, Serialize, PartialEq, Debug)]
pub struct TrainResult {
    pub iterations: usize,
    pub seed: u64,
    /// Average strategy of the learning agent.
    pub agent: Strategy,
    /// Opponent's average strategy in self-play, its fixed strategy otherwise.
    pub opponent: Strategy,
    pub agent_strategy_sum: Vec<f64>,
    pub opponent_strategy_sum: Option<Vec<f64>>,
    pub history: History,
}

impl TrainResult {
    pub fn profile(&self) -> Profile {
        vec![
            (Player::P1, self.agent.clone()),
            (Player::P2, self.opponent.clone()),
        ]
        .into_iter()
        .collect()
    }
}

enum Opponent {
    Fixed(Strategy),
    Learner(RegretAgent),
}

pub struct Trainer {
    config: TrainerConfig,
    dominance: DominanceRelation,
    agent: RegretAgent,
    opponent: Opponent,
    rng: SmallRng,
    seed: u64,
    iteration: usize,
    history: History,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        let dominance = DominanceRelation::new(config.num_actions)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("seed: {}", seed);

        let opponent = match &config.opponent {
            OpponentModel::Fixed(opp_strt) => Opponent::Fixed(opp_strt.clone()),
            OpponentModel::SelfPlay => Opponent::Learner(RegretAgent::new(config.num_actions)),
        };
        Ok(Trainer {
            agent: RegretAgent::new(config.num_actions),
            opponent,
            dominance,
            rng: SmallRng::seed_from_u64(seed),
            seed,
            iteration: 0,
            history: History {
                stride: config.snapshot_stride.unwrap_or(0),
                snapshots: Vec::new(),
            },
            config,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn dominance(&self) -> &DominanceRelation {
        &self.dominance
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn agent(&self) -> &RegretAgent {
        &self.agent
    }

    /// The learning opponent, present only in self-play.
    pub fn opponent_agent(&self) -> Option<&RegretAgent> {
        match &self.opponent {
            Opponent::Fixed(_) => None,
            Opponent::Learner(opp) => Some(opp),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn opponent_strategy(&self) -> Strategy {
        match &self.opponent {
            Opponent::Fixed(opp_strt) => opp_strt.clone(),
            Opponent::Learner(opp) => opp.average_strategy(),
        }
    }

    /// Runs a single iteration and returns the realized (agent, opponent) actions.
    pub fn step(&mut self) -> (ActionId, ActionId) {
        let offset = self.config.regret_offset();
        let Trainer {
            dominance,
            agent,
            opponent,
            rng,
            ..
        } = self;

        let strt = agent.current_strategy();
        let my_action = strategy::sample_action(&strt, rng);

        let opp_action = match opponent {
            Opponent::Fixed(opp_strt) => {
                let opp_action = strategy::sample_action(opp_strt, rng);
                agent.accumulate_regret(my_action, &dominance.utility_for(opp_action), offset);
                opp_action
            }
            Opponent::Learner(opp) => {
                let opp_strt = opp.current_strategy();
                let opp_action = strategy::sample_action(&opp_strt, rng);
                agent.accumulate_regret(my_action, &dominance.utility_for(opp_action), offset);
                // zero-sum: the opponent earns the negation of what my action earns
                let opp_util = agent::negated(&dominance.payoff_row(my_action));
                opp.accumulate_regret(opp_action, &opp_util, offset);
                opp_action
            }
        };

        self.iteration += 1;
        if self.history.stride > 0 && self.iteration % self.history.stride == 0 {
            self.record();
        }
        (my_action, opp_action)
    }

    fn record(&mut self) {
        let agent_strt = self.agent.average_strategy();
        let opp_strt = self.opponent_strategy();
        let prof: Profile = vec![
            (Player::P1, agent_strt.clone()),
            (Player::P2, opp_strt.clone()),
        ]
        .into_iter()
        .collect();
        let snapshot = Snapshot {
            iteration: self.iteration,
            value: solver::calc_ev(&self.dominance, &agent_strt, &opp_strt),
            exploitability: solver::calc_exploitability(&self.dominance, &prof),
            agent: agent_strt,
            opponent: opp_strt,
        };
        trace!("snapshot: {:?}", snapshot);
        self.history.snapshots.push(snapshot);
    }

    /// Runs `iterations` more iterations and reports the averages so far.
    pub fn run(&mut self, iterations: usize) -> TrainResult {
        trace!("start: run({})", iterations);
        let bar = if self.config.show_progress {
            ProgressBar::new(iterations as u64)
        } else {
            ProgressBar::hidden()
        };
        for _ in (0..iterations).progress_with(bar) {
            self.step();
        }

        if let Ok(json) = serde_json::to_string(&self.history) {
            debug!("history: {}", json);
        }
        trace!("finish: run({})", iterations);
        self.result()
    }

    pub fn result(&self) -> TrainResult {
        TrainResult {
            iterations: self.iteration,
            seed: self.seed,
            agent: self.agent.average_strategy(),
            opponent: self.opponent_strategy(),
            agent_strategy_sum: self.agent.strategy_sum().to_vec(),
            opponent_strategy_sum: self
                .opponent_agent()
                .map(|opp| opp.strategy_sum().to_vec()),
            history: self.history.clone(),
        }
    }
}

/// Builds a trainer from `config` and runs it for `iterations` iterations.
/// # Example
/// ```
/// use rps_cfr::*;
/// let config = cfr::TrainerConfig::self_play(3).with_seed(1);
/// let res = cfr::train(config, 1000).unwrap();
/// assert_eq!(res.agent.len(), 3);
/// ```
pub fn train(config: TrainerConfig, iterations: usize) -> Result<TrainResult> {
    Ok(Trainer::new(config)?.run(iterations))
}

/// Approximate the symmetric Nash equilibrium by self-play.
pub fn calc_nash_strt(num_actions: usize, step: usize, seed: u64) -> Result<Profile> {
    let res = train(TrainerConfig::self_play(num_actions).with_seed(seed), step)?;
    profile::from_strt(&Player::P1, res.agent, &Player::P2, res.opponent)
}
