// SPDX-License-Identifier: Unlicense
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use pratt_calc::genexpr::{Generator, Rng};

/// Prints one random, syntactically valid calculator expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Recursion depth after which operands become plain literals
    max_depth: u32,

    /// Seed for a reproducible expression; defaults to the current time
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    });
    log::debug!("seed {seed}, max depth {}", args.max_depth);

    let expr = Generator::new(Rng::new(seed), args.max_depth).generate();
    println!("{expr}");
}
