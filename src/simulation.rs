//! Generation loop: render, pause, advance, until extinction.

use std::io;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::engine::next_generation;
use crate::grid::{Grid, GridError};
use crate::render::RenderSink;
use crate::stats::Stats;

/// Default pause between two generations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("render failed: {0}")]
    Render(#[from] io::Error),
}

/// What the timer wants the loop to do after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Blocking delay between ticks. Returning [`Control::Stop`] cancels the run.
pub trait Timer {
    fn pause(&mut self, interval: Duration) -> io::Result<Control>;
}

/// Sleeps the current thread; never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepTimer;

impl Timer for SleepTimer {
    fn pause(&mut self, interval: Duration) -> io::Result<Control> {
        thread::sleep(interval);
        Ok(Control::Continue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Running { generation: u64, grid: Grid },
    Terminated { generation: u64 },
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Generation `generation` was the last one with a living cell.
    Extinct { generation: u64 },
    /// The timer asked to stop after rendering `generation`.
    Cancelled { generation: u64 },
    /// The generation cap was reached.
    Limit { generation: u64 },
}

/// Owns the current grid and drives it forward one generation per tick.
#[derive(Debug)]
pub struct Simulation {
    state: State,
    stats: Stats,
    interval: Duration,
    max_generations: Option<u64>,
}

impl Simulation {
    pub fn new(initial: Grid) -> Self {
        Simulation {
            stats: Stats::new(&initial),
            state: State::Running {
                generation: 0,
                grid: initial,
            },
            interval: DEFAULT_INTERVAL,
            max_generations: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Stops the run once generation `limit` has been rendered.
    pub fn with_max_generations(mut self, limit: Option<u64>) -> Self {
        self.max_generations = limit;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn generation(&self) -> u64 {
        match self.state {
            State::Running { generation, .. } | State::Terminated { generation } => generation,
        }
    }

    /// Advances one generation. Returns `false` once the simulation has
    /// terminated; no generation is ever computed past extinction.
    pub fn step(&mut self) -> Result<bool, GridError> {
        let State::Running { generation, grid } = &self.state else {
            return Ok(false);
        };
        let generation = *generation;

        let (next, any_alive) = next_generation(grid)?;
        if !any_alive {
            info!("population extinct after generation {}", generation);
            self.state = State::Terminated { generation };
            return Ok(false);
        }

        self.stats.record(grid, &next);
        debug!(
            "generation {} -> {}: population {}",
            generation,
            generation + 1,
            self.stats.current_population
        );
        self.state = State::Running {
            generation: generation + 1,
            grid: next,
        };
        Ok(true)
    }

    /// Runs until extinction, cancellation by the timer, or the generation
    /// cap. Each tick renders the current generation, pauses, then advances.
    pub fn run<S, T>(&mut self, sink: &mut S, timer: &mut T) -> Result<Outcome, SimulationError>
    where
        S: RenderSink + ?Sized,
        T: Timer + ?Sized,
    {
        info!(
            "starting simulation: interval {:?}, limit {:?}",
            self.interval, self.max_generations
        );

        loop {
            let generation = match &self.state {
                State::Running { generation, grid } => {
                    sink.render(grid, *generation, &self.stats)?;
                    *generation
                }
                State::Terminated { generation } => {
                    sink.extinct(*generation)?;
                    return Ok(Outcome::Extinct {
                        generation: *generation,
                    });
                }
            };

            if self.max_generations.is_some_and(|limit| generation >= limit) {
                info!("generation limit reached at {}", generation);
                return Ok(Outcome::Limit { generation });
            }

            if timer.pause(self.interval)? == Control::Stop {
                warn!("simulation cancelled at generation {}", generation);
                return Ok(Outcome::Cancelled { generation });
            }

            self.step()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        let mut layout = vec![vec![false; 5]; 5];
        layout[2] = vec![false, true, true, true, false];
        Grid::from_layout(layout).unwrap()
    }

    #[test]
    fn starts_running_at_generation_zero() {
        let sim = Simulation::new(blinker());
        assert!(matches!(sim.state(), State::Running { generation: 0, .. }));
        assert_eq!(sim.stats().current_population, 3);
    }

    #[test]
    fn step_advances_generation() {
        let mut sim = Simulation::new(blinker());
        assert_eq!(sim.step(), Ok(true));
        assert_eq!(sim.step(), Ok(true));
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.state(), &State::Running { generation: 2, grid: blinker() });
    }

    #[test]
    fn lone_cell_terminates_without_advancing() {
        let mut layout = vec![vec![false; 3]; 3];
        layout[1][1] = true;
        let mut sim = Simulation::new(Grid::from_layout(layout).unwrap());

        assert_eq!(sim.step(), Ok(false));
        assert_eq!(sim.state(), &State::Terminated { generation: 0 });
        assert_eq!(sim.step(), Ok(false));
        assert_eq!(sim.generation(), 0);
    }
}
