use crate::grid::Grid;

/// Stores statistics about a running simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Current generation number
    pub generation: u64,
    /// Total number of cells born since start
    pub cells_created: u64,
    /// Total number of cells that died since start
    pub cells_destroyed: u64,
    /// Current number of living cells
    pub current_population: u64,
}

impl Stats {
    /// Creates statistics for the initial generation of `grid`.
    pub fn new(grid: &Grid) -> Self {
        Stats {
            current_population: grid.population() as u64,
            ..Stats::default()
        }
    }

    /// Records the transition from `prev` to `next`, counting each cell that
    /// changed state as a birth or a death.
    pub fn record(&mut self, prev: &Grid, next: &Grid) {
        let mut created = 0;
        let mut destroyed = 0;
        for (old_row, new_row) in prev.rows().zip(next.rows()) {
            for (&old, &new) in old_row.iter().zip(new_row) {
                match (old, new) {
                    (false, true) => created += 1,
                    (true, false) => destroyed += 1,
                    _ => {}
                }
            }
        }

        self.generation += 1;
        self.cells_created += created;
        self.cells_destroyed += destroyed;
        self.current_population = next.population() as u64;
    }

    pub fn birth_rate(&self) -> f64 {
        self.cells_created as f64 / self.generation.max(1) as f64
    }

    pub fn death_rate(&self) -> f64 {
        self.cells_destroyed as f64 / self.generation.max(1) as f64
    }
}
