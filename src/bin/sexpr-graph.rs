// SPDX-License-Identifier: Unlicense
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pratt_calc::{driver, graph};

/// Renders S-expressions such as `(add (mul a b) c)` as a Graphviz digraph.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file with one or more parenthesised lists
    input: PathBuf,
}

fn render(args: &Args) -> Result<String> {
    let src = driver::read_file(&args.input)?;
    let (arena, roots) =
        graph::parse(&src).with_context(|| format!("in {}", args.input.display()))?;
    log::debug!("parsed {} list(s) into {} node(s)", roots.len(), arena.len());
    Ok(graph::render(&arena, &roots)?)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match render(&args) {
        Ok(dot) => print!("{dot}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
