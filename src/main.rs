//! Terminal front end: picks the starting board from the command line, then
//! runs it until the population dies out or the user presses `q`.
//!
//! Exit status is 0 when the run is cancelled or hits its generation cap,
//! and 2 on extinction ("Game Over").

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use toroid_life::simulation::SleepTimer;
use toroid_life::{Config, KeyPollTimer, Outcome, PlainRenderer, Simulation, TuiRenderer};

const EXIT_EXTINCT: u8 = 2;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let grid = config
        .initial_grid()
        .context("failed to build the starting board")?;
    info!(
        "starting {}x{} board with {} live cells",
        grid.size(),
        grid.size(),
        grid.population()
    );

    let mut simulation = Simulation::new(grid)
        .with_interval(config.interval())
        .with_max_generations(config.max_generations);

    let outcome = if config.plain {
        let mut renderer = PlainRenderer::new(io::stdout());
        simulation.run(&mut renderer, &mut SleepTimer)?
    } else {
        run_interactive(&mut simulation)?
    };

    Ok(match outcome {
        Outcome::Extinct { generation } => {
            println!("Game Over after {} generations", generation);
            ExitCode::from(EXIT_EXTINCT)
        }
        Outcome::Cancelled { generation } | Outcome::Limit { generation } => {
            println!("Stopped at generation {}", generation);
            ExitCode::SUCCESS
        }
    })
}

/// Runs the simulation inside the alternate screen, restoring the terminal
/// even when the run fails.
fn run_interactive(simulation: &mut Simulation) -> Result<Outcome> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("failed to build terminal backend")?;

    let mut renderer = TuiRenderer::new(terminal);
    let result = simulation.run(&mut renderer, &mut KeyPollTimer);

    if let Err(err) = disable_raw_mode() {
        error!("failed to disable raw mode: {}", err);
    }
    let terminal = renderer.terminal_mut();
    if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        error!("failed to leave alternate screen: {}", err);
    }
    terminal.show_cursor().ok();

    Ok(result?)
}
