//! # Toroidal Life
//!
//! Conway's Game of Life (B3/S23) on a fixed-size square board whose edges
//! wrap around, advanced one immutable generation at a time until the
//! population dies out.
//!
//! ## Example
//!
//! ```rust
//! use toroid_life::{patterns, Grid, Outcome, PlainRenderer, Simulation};
//! use toroid_life::simulation::{Control, Timer};
//! use std::time::Duration;
//!
//! struct NoWait;
//! impl Timer for NoWait {
//!     fn pause(&mut self, _: Duration) -> std::io::Result<Control> {
//!         Ok(Control::Continue)
//!     }
//! }
//!
//! let grid = Grid::from_layout(patterns::BLINKER.layout()).unwrap();
//! let mut sim = Simulation::new(grid).with_max_generations(Some(4));
//! let mut sink = PlainRenderer::new(Vec::new()).without_clear();
//!
//! let outcome = sim.run(&mut sink, &mut NoWait).unwrap();
//! assert_eq!(outcome, Outcome::Limit { generation: 4 });
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod simulation;
pub mod stats;
pub mod tui;

pub use config::Config;
pub use engine::next_generation;
pub use grid::{Direction, Grid, GridError, NeighborCounts};
pub use render::{PlainRenderer, RenderSink};
pub use simulation::{Outcome, Simulation, SimulationError, State};
pub use stats::Stats;
pub use tui::{KeyPollTimer, TuiRenderer};
