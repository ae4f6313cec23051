use argh::FromArgs;
use rps_cfr::*;
use std::fs;
use std::process;
use std::time::Instant;

#[macro_use]
extern crate log;

/// Train a regret-matching agent on rock-paper-scissors style games.
#[derive(FromArgs)]
struct Args {
    /// game preset (rps or rpsls) or an odd action count
    #[argh(option, default = "String::from(\"rps\")")]
    game: String,

    /// number of training iterations
    #[argh(option, default = "100_000")]
    iterations: usize,

    /// fixed opponent strategy, comma separated (0.4,0.3,0.3) or a JSON file;
    /// entries follow the preset's action order, for rpsls that is
    /// Rock, Spock, Paper, Lizard, Scissors
    #[argh(option)]
    opponent: Option<String>,

    /// train both players against each other
    #[argh(switch)]
    self_play: bool,

    /// random seed
    #[argh(option)]
    seed: Option<u64>,

    /// record the average strategy every K iterations
    #[argh(option)]
    stride: Option<usize>,

    /// regret bonus per action and iteration
    #[argh(option)]
    offset: Option<f64>,

    /// JSON trainer config, overrides --opponent/--self-play/--seed/--stride/--offset
    #[argh(option)]
    config: Option<String>,

    /// write the recorded history as JSON to this path
    #[argh(option)]
    history: Option<String>,

    /// show a progress bar
    #[argh(switch)]
    progress: bool,
}

fn parse_strategy(s: &str) -> Result<strategy::Strategy> {
    if s.ends_with(".json") {
        return strategy::from_file(s);
    }
    s.split(',')
        .map(|prob| {
            prob.trim().parse::<f64>().map_err(|e| {
                Error::InvalidConfiguration(format!("invalid probability {:?}: {}", prob, e))
            })
        })
        .collect()
}

fn build_config(args: &Args, num_actions: usize) -> Result<cfr::TrainerConfig> {
    if let Some(path) = &args.config {
        return cfr::from_file(path);
    }
    let mut config = match (&args.opponent, args.self_play) {
        (Some(_), true) => {
            return Err(Error::InvalidConfiguration(String::from(
                "--opponent and --self-play are exclusive",
            )))
        }
        (Some(opp), false) => cfr::TrainerConfig::fixed(num_actions, parse_strategy(opp)?),
        (None, _) => cfr::TrainerConfig::self_play(num_actions),
    };
    config.seed = args.seed;
    config.snapshot_stride = args.stride;
    config.regret_offset = args.offset;
    config.show_progress = args.progress;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    trace!("start: main");
    let rule = match args.game.parse::<usize>() {
        Ok(num_actions) => rule::indexed(num_actions)?,
        Err(_) => rule::from_name(&args.game)?,
    };
    let config = build_config(&args, rule.num_actions())?;
    if config.num_actions != rule.num_actions() {
        return Err(Error::InvalidConfiguration(format!(
            "config is for {} actions but {} has {}",
            config.num_actions,
            args.game,
            rule.num_actions()
        )));
    }

    let mut trainer = cfr::Trainer::new(config)?;
    let start = Instant::now();
    let res = trainer.run(args.iterations);
    info!(
        "elapsed time: {} [sec]",
        start.elapsed().as_nanos() as f64 / 1_000_000_000 as f64
    );

    match trainer.config().opponent {
        cfr::OpponentModel::Fixed(_) => {
            println!(
                "Opponent Strategy\n{}\n",
                visualizer::format_dist(&rule.actions, &res.opponent)
            );
        }
        cfr::OpponentModel::SelfPlay => {
            visualizer::print_prof(&rule.actions, &res.profile());
        }
    }
    println!("Number of Iterations: {}\n", res.iterations);
    println!(
        "Trainer Strategy\n{}",
        visualizer::format_dist(&rule.actions, &res.agent)
    );
    println!(
        "{}",
        visualizer::format_percentages(&rule.actions, &res.agent)
    );
    println!(
        "expected value: {:.8}",
        solver::calc_ev(&rule.dominance, &res.agent, &res.opponent)
    );
    println!(
        "exploitability: {:.8}",
        solver::calc_exploitability(&rule.dominance, &res.profile())
    );

    if !res.history.is_empty() {
        debug!(
            "\n{}",
            visualizer::format_history(&rule.actions, &res.history)
        );
    }
    if let Some(path) = &args.history {
        fs::write(path, serde_json::to_string_pretty(&res.history)?)?;
        info!("history written to {}", path);
    }

    trace!("finish: main");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
