// SPDX-License-Identifier: Unlicense
use std::{io::Read, path::Path};

use anyhow::{Context, Result};

use crate::{eval, parser, printer};

/// What the calculator writes for each top-level expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Fully parenthesised prefix form
    #[default]
    Print,
    /// Numeric value
    Eval,
    /// Prefix form followed by `= value`
    Both,
}

pub fn read_file(source: &Path) -> Result<String> {
    let mut buf = String::new();
    let mut f = std::fs::File::open(source)
        .with_context(|| format!("failed to open {}", source.display()))?;
    f.read_to_string(&mut buf)
        .with_context(|| format!("failed to read {}", source.display()))?;
    Ok(buf)
}

/// Parses every expression in `source` and renders one line per expression.
pub fn run_string(source: &str, mode: Mode) -> Result<Vec<String>, crate::Error> {
    let (arena, roots) = parser::parse(source)?;
    log::debug!(
        "parsed {} expression(s) into {} node(s)",
        roots.len(),
        arena.len()
    );

    roots
        .iter()
        .map(|&root| -> Result<String, crate::Error> {
            Ok(match mode {
                Mode::Print => printer::print(&arena, root)?,
                Mode::Eval => eval::evaluate(&arena, root)?.to_string(),
                Mode::Both => format!(
                    "{} = {}",
                    printer::print(&arena, root)?,
                    eval::evaluate(&arena, root)?
                ),
            })
        })
        .collect()
}

pub fn run(source: &Path, mode: Mode) -> Result<Vec<String>> {
    let src = read_file(source)?;
    let lines = run_string(&src, mode).with_context(|| format!("in {}", source.display()))?;
    Ok(lines)
}
