// main.rs - Terminal front end: prompt, seed, then print every generation

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{LevelFilter, debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simple_logger::SimpleLogger;

use conway::{Driver, Grid};

mod config;

use config::Settings;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("initialising logger")?;
    info!("Starting game_of_life v{} ...", env!("CARGO_PKG_VERSION"));

    let settings = {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Settings::prompt(&mut stdin.lock(), &mut stdout)?.with_seed(config::seed_from_env()?)
    };
    debug!("{settings:?}");

    let mut grid = Grid::new(settings.width, settings.height)?;
    match settings.seed {
        Some(seed) => grid.populate_seeded(seed),
        None => grid.populate(&mut StdRng::from_os_rng()),
    }

    let mut driver = Driver::new(grid);
    let mut out = io::BufWriter::new(io::stdout().lock());
    let mut failure = None;

    driver.run(settings.generations, |generation, grid| {
        if failure.is_none() {
            if let Err(err) = print_generation(&mut out, generation, grid) {
                failure = Some(err);
            }
        }
    })?;

    if let Some(err) = failure {
        return Err(err).context("writing to stdout");
    }
    out.flush().context("writing to stdout")?;
    Ok(())
}

fn print_generation<W: Write>(out: &mut W, generation: u64, grid: &Grid) -> io::Result<()> {
    writeln!(out, "Generation {generation} ({} alive)", grid.population())?;
    write!(out, "{grid}")?;
    writeln!(out, "{}", "-".repeat(grid.width()))
}
