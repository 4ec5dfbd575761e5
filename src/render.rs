//! Render sinks consumed by the simulation loop.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};

use crate::grid::Grid;
use crate::stats::Stats;

pub const ALIVE_GLYPH: &str = "x ";
pub const DEAD_GLYPH: &str = "o ";

/// Receives each generation before it is advanced.
pub trait RenderSink {
    fn render(&mut self, grid: &Grid, generation: u64, stats: &Stats) -> io::Result<()>;

    /// Called once when the population has died out after `generation`.
    fn extinct(&mut self, generation: u64) -> io::Result<()>;
}

/// Renders one row as two-character glyphs, without color.
pub fn row_text(row: &[bool]) -> String {
    row.iter()
        .map(|&cell| if cell { ALIVE_GLYPH } else { DEAD_GLYPH })
        .collect()
}

pub fn caption(generation: u64) -> String {
    format!("Generation: {}", generation)
}

/// Clears the screen and prints the grid as colored text.
pub struct PlainRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        PlainRenderer { out, clear: true }
    }

    /// Appends generations one after another instead of redrawing.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for PlainRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64, _stats: &Stats) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        for row in grid.rows() {
            for &cell in row {
                if cell {
                    queue!(self.out, PrintStyledContent(ALIVE_GLYPH.green()))?;
                } else {
                    queue!(self.out, Print(DEAD_GLYPH))?;
                }
            }
            queue!(self.out, Print("\r\n"))?;
        }

        queue!(
            self.out,
            Print("\r\n"),
            Print("Generation: "),
            PrintStyledContent(generation.to_string().green()),
            Print("\r\n")
        )?;
        self.out.flush()
    }

    fn extinct(&mut self, _generation: u64) -> io::Result<()> {
        queue!(self.out, Print("\r\n"), PrintStyledContent("Game Over".red()), Print("\r\n"))?;
        self.out.flush()
    }
}
