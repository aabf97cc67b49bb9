// config.rs - Run settings gathered from the user

use std::env;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Environment variable that pins the random seed for reproducible runs.
pub const SEED_VAR: &str = "CONWAY_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub width: i64,
    pub height: i64,
    pub generations: i64,
    pub seed: Option<u64>,
}

impl Settings {
    /// Asks for board width, height and generation count, in that order.
    /// Values are passed through unvalidated; the simulation rejects
    /// non-positive dimensions and negative generation counts itself.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        let width = ask(input, output, "Enter board width: ")?;
        let height = ask(input, output, "Enter board height: ")?;
        let generations = ask(input, output, "How many generations would you like to simulate? ")?;
        Ok(Self {
            width,
            height,
            generations,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Reads [`SEED_VAR`]; unset means no fixed seed.
pub fn seed_from_env() -> Result<Option<u64>> {
    match env::var(SEED_VAR) {
        Ok(raw) => parse_seed(&raw).map(Some),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {SEED_VAR}")),
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<i64> {
    write!(output, "{question}").context("writing prompt")?;
    output.flush().context("flushing prompt")?;

    let mut line = String::new();
    if input.read_line(&mut line).context("reading answer")? == 0 {
        bail!("input ended before answering {:?}", question.trim());
    }
    let answer = line.trim();
    answer
        .parse()
        .with_context(|| format!("expected a whole number, got {answer:?}"))
}
