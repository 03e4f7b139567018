//! Generate a sequence and time each reduction over it.

use clap::{value_parser, Arg, Command};
use minmax::{
    sequence::{self, Config},
    Reducer,
};
use minmax_parallel::{Parallel, Strategy};
use rand::{rngs::StdRng, SeedableRng};
use std::{process::ExitCode, time::Instant};
use tracing::{error, info, Level};

fn main() -> ExitCode {
    let matches = Command::new("minmax")
        .about("time locked, partitioned, shared, and folded reductions of a random sequence")
        .arg(
            Arg::new("length")
                .long("length")
                .required(false)
                .value_parser(value_parser!(usize))
                .default_value("100000"),
        )
        .arg(
            Arg::new("lower")
                .long("lower")
                .required(false)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value("-10000"),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .required(false)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value("10000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .required(false)
                .help("worker threads (0 lets rayon choose)")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .required(false)
                .help("locked, partitioned, shared, folded, or all")
                .default_value("all"),
        )
        .arg(
            Arg::new("iterations")
                .long("iterations")
                .required(false)
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .required(false)
                .value_parser(value_parser!(Level))
                .default_value("info"),
        )
        .get_matches();

    // Initialize logging
    let level = *matches
        .get_one::<Level>("log-level")
        .expect("default provided");
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse arguments
    let config = Config {
        length: *matches
            .get_one::<usize>("length")
            .expect("default provided"),
        lower: *matches.get_one::<i32>("lower").expect("default provided"),
        upper: *matches.get_one::<i32>("upper").expect("default provided"),
    };
    let seed = *matches.get_one::<u64>("seed").expect("default provided");
    let threads = *matches
        .get_one::<usize>("threads")
        .expect("default provided");
    let iterations = *matches
        .get_one::<usize>("iterations")
        .expect("default provided");
    let selected = matches
        .get_one::<String>("strategy")
        .expect("default provided");
    let reducers = if selected == "all" {
        Reducer::ALL.to_vec()
    } else {
        match selected.parse::<Reducer>() {
            Ok(reducer) => vec![reducer],
            Err(err) => {
                error!(?err, "invalid strategy");
                return ExitCode::FAILURE;
            }
        }
    };

    // Prepare input
    let mut rng = StdRng::seed_from_u64(seed);
    let values = match sequence::generate(&mut rng, &config) {
        Ok(values) => values,
        Err(err) => {
            error!(?err, "failed to generate sequence");
            return ExitCode::FAILURE;
        }
    };
    let strategy = match Parallel::with_threads(threads) {
        Ok(strategy) => strategy,
        Err(err) => {
            error!(?err, "failed to build thread pool");
            return ExitCode::FAILURE;
        }
    };
    info!(
        length = config.length,
        lower = config.lower,
        upper = config.upper,
        seed,
        threads = strategy.parallelism(),
        "generated sequence"
    );

    // Run each reducer
    for reducer in reducers {
        for iteration in 0..iterations {
            let start = Instant::now();
            let result = reducer.run(&strategy, &values);
            let elapsed = start.elapsed();
            match result {
                Ok(extrema) => info!(
                    %reducer,
                    iteration,
                    ?elapsed,
                    %extrema,
                    "reduction complete"
                ),
                Err(err) => {
                    error!(%reducer, iteration, %err, "reduction failed");
                    break;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
