//! Interactive terminal interface built on `ratatui` and `crossterm`.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use sysinfo::{System, SystemExt};

use crate::grid::Grid;
use crate::render::{caption, RenderSink};
use crate::simulation::{Control, Timer};
use crate::stats::Stats;

const TUI_ALIVE: &str = "██";
const TUI_DEAD: &str = "  ";

/// Draws each generation into a grid panel and a statistics panel.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    /// System information for resource monitoring
    sys: System,
    status: &'static str,
    /// Last rendered generation, kept on screen after extinction
    last: Option<(Grid, u64, Stats)>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TuiRenderer {
            terminal,
            sys: System::new_all(),
            status: "Running",
            last: None,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn draw(&mut self) -> io::Result<()> {
        self.sys.refresh_memory();
        let sys = &self.sys;
        let status = self.status;
        let last = self.last.as_ref();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
                .split(f.size());

            if let Some((grid, generation, stats)) = last {
                draw_grid(f, grid, *generation, chunks[0]);
                draw_stats(f, stats, sys, status, chunks[1]);
            } else {
                draw_stats(f, &Stats::default(), sys, status, chunks[1]);
            }
        })?;
        Ok(())
    }
}

impl<B: Backend> RenderSink for TuiRenderer<B> {
    fn render(&mut self, grid: &Grid, generation: u64, stats: &Stats) -> io::Result<()> {
        self.last = Some((grid.clone(), generation, stats.clone()));
        self.draw()
    }

    fn extinct(&mut self, _generation: u64) -> io::Result<()> {
        self.status = "Game Over";
        self.draw()
    }
}

/// Draws the grid panel: one line per row, alive cells in green.
fn draw_grid(f: &mut Frame, grid: &Grid, generation: u64, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Game of Life [q: Quit] {}", caption(generation)));

    let alive = Style::default().fg(Color::Green);
    let lines: Vec<Line> = grid
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&cell| {
                        if cell {
                            Span::styled(TUI_ALIVE, alive)
                        } else {
                            Span::raw(TUI_DEAD)
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

/// Draws the statistics panel.
fn draw_stats(f: &mut Frame, stats: &Stats, sys: &System, status: &str, area: Rect) {
    let memory_used = sys.used_memory() / 1024; // Convert to KB
    let memory_total = sys.total_memory() / 1024;

    let stats_text = format!(
        "Statistics:\n\
        Generation: {}\n\
        Current Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        stats.generation,
        stats.current_population,
        stats.cells_created,
        stats.cells_destroyed,
        stats.birth_rate(),
        stats.death_rate(),
        memory_used,
        memory_total as f64 / 1024.0,
        status
    );

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

/// Waits out the interval while watching for `q` or `Esc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyPollTimer;

impl Timer for KeyPollTimer {
    fn pause(&mut self, interval: Duration) -> io::Result<Control> {
        let deadline = Instant::now() + interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(Control::Continue);
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(Control::Stop);
                }
            }
            if Instant::now() >= deadline {
                return Ok(Control::Continue);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn buffer_text(renderer: &mut TuiRenderer<TestBackend>) -> String {
        renderer
            .terminal_mut()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol.clone())
            .collect()
    }

    #[test]
    fn draws_grid_and_statistics() {
        let mut layout = vec![vec![false; 5]; 5];
        layout[2] = vec![false, true, true, true, false];
        let grid = Grid::from_layout(layout).unwrap();
        let stats = Stats::new(&grid);

        let terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let mut renderer = TuiRenderer::new(terminal);
        renderer.render(&grid, 4, &stats).unwrap();

        let text = buffer_text(&mut renderer);
        assert!(text.contains("Generation: 4"));
        assert!(text.contains("Population: 3"));
        assert_eq!(text.matches('█').count(), 6);
    }

    #[test]
    fn extinction_updates_status() {
        let terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let mut renderer = TuiRenderer::new(terminal);
        renderer.extinct(9).unwrap();

        let text = buffer_text(&mut renderer);
        assert!(text.contains("Game Over"));
    }
}
