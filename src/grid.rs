//! Square toroidal grid holding one generation of cell states.
//!
//! A [`Grid`] is never mutated after construction. Each generation is a new
//! grid built from a full layout of next-states.

use rand::Rng;
use thiserror::Error;

/// Errors raised while building or querying a [`Grid`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },
    #[error("cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Step along one axis of the torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Predecessor,
    Successor,
}

/// Alive/dead tallies over the eight neighbors of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    pub alive: u8,
    pub dead: u8,
}

/// One generation of an `N x N` board, stored row-major as `cells[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<bool>>,
    size: usize,
}

impl Grid {
    /// Creates a `size x size` grid where each cell is alive with the given
    /// probability.
    ///
    /// `size` must be at least 1 and `alive_probability` must lie in
    /// `[0, 1]`; callers validate both.
    pub fn random<R: Rng + ?Sized>(size: usize, alive_probability: f64, rng: &mut R) -> Grid {
        let cells = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_bool(alive_probability)).collect())
            .collect();

        Grid { cells, size }
    }

    /// Builds a grid from a literal layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLayout`] if the layout is empty, or if any
    /// row's length differs from the number of rows.
    pub fn from_layout(layout: Vec<Vec<bool>>) -> Result<Grid, GridError> {
        let size = layout.len();
        if size == 0 {
            return Err(GridError::InvalidLayout {
                reason: "layout has no rows".to_string(),
            });
        }

        let width = layout[0].len();
        if let Some((y, row)) = layout.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(GridError::InvalidLayout {
                reason: format!("row {} has {} cells, row 0 has {}", y, row.len(), width),
            });
        }
        if width != size {
            return Err(GridError::InvalidLayout {
                reason: format!("layout is {}x{}, expected a square", width, size),
            });
        }

        Ok(Grid {
            cells: layout,
            size,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Returns the state of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if either coordinate is `>= N`.
    pub fn state_at(&self, x: usize, y: usize) -> Result<bool, GridError> {
        if x >= self.size || y >= self.size {
            return Err(GridError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(self.cells[y][x])
    }

    /// Counts the living cells on the board.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell)
            .count()
    }

    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|row| row.contains(&true))
    }

    /// The eight wrapped neighbor positions of `(x, y)`, orthogonal first:
    /// left, right, top, bottom, left-top, left-bottom, right-top,
    /// right-bottom.
    ///
    /// On small boards several of these may coincide, and on a 1x1 board
    /// all of them are the cell itself.
    pub fn neighbor_positions(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let left = wrapped_neighbor_coordinate(x, self.size, Direction::Predecessor);
        let right = wrapped_neighbor_coordinate(x, self.size, Direction::Successor);
        let top = wrapped_neighbor_coordinate(y, self.size, Direction::Predecessor);
        let bottom = wrapped_neighbor_coordinate(y, self.size, Direction::Successor);

        [
            (left, y),
            (right, y),
            (x, top),
            (x, bottom),
            (left, top),
            (left, bottom),
            (right, top),
            (right, bottom),
        ]
    }

    /// Tallies the alive and dead neighbors of `(x, y)` in this generation.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `(x, y)` is not on the board.
    pub fn neighbor_states(&self, x: usize, y: usize) -> Result<NeighborCounts, GridError> {
        self.state_at(x, y)?;

        let mut counts = NeighborCounts::default();
        for (nx, ny) in self.neighbor_positions(x, y) {
            if self.state_at(nx, ny)? {
                counts.alive += 1;
            } else {
                counts.dead += 1;
            }
        }
        Ok(counts)
    }
}

/// Moves one step along an axis of length `length`, wrapping at both edges.
///
/// For `length == 1` this always yields 0.
#[inline]
pub fn wrapped_neighbor_coordinate(axis_value: usize, length: usize, direction: Direction) -> usize {
    debug_assert!(length > 0 && axis_value < length);
    match direction {
        Direction::Predecessor => (axis_value + length - 1) % length,
        Direction::Successor => (axis_value + 1) % length,
    }
}
