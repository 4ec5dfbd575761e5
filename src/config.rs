//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::patterns;

pub const DEFAULT_SIZE: usize = 40;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.30;
pub const DEFAULT_INTERVAL_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("alive probability {0} is not between 0 and 1")]
    Probability(f64),
    #[error("unknown pattern '{name}', expected one of: {known}")]
    UnknownPattern { name: String, known: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Conway's Game of Life on a wrap-around square board.
#[derive(Debug, Clone, Parser)]
#[command(name = "toroid_life", version, about, long_about = None)]
pub struct Config {
    /// Side length of a randomly filled board.
    #[arg(short, long, value_name = "CELLS", default_value_t = DEFAULT_SIZE, conflicts_with = "pattern")]
    pub size: usize,

    /// Probability that each cell of a random board starts alive.
    #[arg(short = 'p', long, value_name = "P", default_value_t = DEFAULT_ALIVE_PROBABILITY)]
    pub probability: f64,

    /// Start from a named pattern (blinker, beacon, toad, glider) instead of a random board.
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,

    /// Seed for the random board; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds to wait between generations.
    #[arg(short, long = "interval-ms", value_name = "MILLISECONDS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Stop after this many generations even if cells remain alive.
    #[arg(short = 'g', long, value_name = "COUNT")]
    pub max_generations: Option<u64>,

    /// Print plain colored text instead of the interactive interface.
    #[arg(long)]
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            probability: DEFAULT_ALIVE_PROBABILITY,
            pattern: None,
            seed: None,
            interval_ms: DEFAULT_INTERVAL_MS,
            max_generations: None,
            plain: false,
        }
    }
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Builds the first generation: the named pattern if one was given,
    /// otherwise a random board.
    pub fn initial_grid(&self) -> Result<Grid, ConfigError> {
        if let Some(name) = &self.pattern {
            let pattern = patterns::by_name(name).ok_or_else(|| ConfigError::UnknownPattern {
                name: name.clone(),
                known: patterns::names().collect::<Vec<_>>().join(", "),
            })?;
            return Ok(Grid::from_layout(pattern.layout())?);
        }

        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ConfigError::Probability(self.probability));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Grid::random(self.size, self.probability, &mut rng))
    }
}
