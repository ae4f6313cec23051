extern crate rps_cfr;
use argh::FromArgs;
use indicatif::ProgressIterator;
use rps_cfr::*;
use std::time::Instant;

macro_rules! time {
    ($x:expr) => {{
        let start = Instant::now();
        $x;
        let end = start.elapsed();
        end.as_nanos() as f64 / 1_000_000_000 as f64
    }};
}

/// Time repeated self-play training runs.
#[derive(FromArgs)]
struct Args {
    /// game preset: rps or rpsls
    #[argh(positional)]
    game: String,

    /// iterations per run
    #[argh(positional)]
    step: usize,

    /// number of runs
    #[argh(positional)]
    run: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();
    let rule = rule::from_name(&args.game)?;

    let mut nanos: Vec<f64> = Vec::new();
    for seed in (0..args.run).progress() {
        let config = cfr::TrainerConfig::self_play(rule.num_actions()).with_seed(seed as u64);
        let mut trainer = cfr::Trainer::new(config)?;
        nanos.push(time!({ trainer.run(args.step) }));
    }

    let avg = nanos.iter().sum::<f64>() / nanos.len() as f64;
    let std = (nanos
        .iter()
        .map(|t| t - avg)
        .map(|t| t * t)
        .sum::<f64>()
        / nanos.len() as f64)
        .sqrt();

    dbg!(avg);
    dbg!(std);
    Ok(())
}
