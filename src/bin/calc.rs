// SPDX-License-Identifier: Unlicense
use std::path::PathBuf;

use clap::Parser;
use pratt_calc::driver::{self, Mode};

/// Parses arithmetic expressions and prints their structure or value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file; each top-level expression produces one output line
    input: PathBuf,

    /// What to output per expression
    #[arg(short, long, value_enum, default_value_t = Mode::Print)]
    mode: Mode,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match driver::run(&args.input, args.mode) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
