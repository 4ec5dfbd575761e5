//! Life transition rule (B3/S23) and generation advance.

use crate::grid::{Grid, GridError};

/// Returns the next state of a cell given its current state and the number
/// of living neighbors:
///
/// * fewer than two living neighbors: dies (underpopulation)
/// * more than three living neighbors: dies (overpopulation)
/// * alive with exactly two: survives
/// * exactly three: survives or is born
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (_, n) if n < 2 => false,
        (_, n) if n > 3 => false,
        (true, 2) => true,
        (_, 3) => true,
        _ => false,
    }
}

/// Computes the successor of `current` and whether any cell in it is alive.
///
/// Every cell is evaluated against `current` only; the new layout is
/// assembled into a grid once all cells have been evaluated.
pub fn next_generation(current: &Grid) -> Result<(Grid, bool), GridError> {
    let size = current.size();
    let mut any_alive = false;
    let mut layout = Vec::with_capacity(size);

    for y in 0..size {
        let mut row = Vec::with_capacity(size);
        for x in 0..size {
            let counts = current.neighbor_states(x, y)?;
            let state = next_state(current.state_at(x, y)?, counts.alive);
            any_alive |= state;
            row.push(state);
        }
        layout.push(row);
    }

    Ok((Grid::from_layout(layout)?, any_alive))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: [(usize, usize); 8] = [
        (0, 0),
        (1, 0),
        (2, 0),
        (0, 1),
        (2, 1),
        (0, 2),
        (1, 2),
        (2, 2),
    ];

    /// 3x3 grid whose center has exactly `n` living neighbors.
    fn center_with_neighbors(center: bool, n: usize) -> Grid {
        let mut layout = vec![vec![false; 3]; 3];
        layout[1][1] = center;
        for &(x, y) in RING.iter().take(n) {
            layout[y][x] = true;
        }
        Grid::from_layout(layout).unwrap()
    }

    fn center_after_one_step(center: bool, n: usize) -> bool {
        let grid = center_with_neighbors(center, n);
        assert_eq!(grid.neighbor_states(1, 1).unwrap().alive as usize, n);
        let (next, _) = next_generation(&grid).unwrap();
        next.state_at(1, 1).unwrap()
    }

    #[test]
    fn rule_table() {
        for center in [false, true] {
            assert!(!center_after_one_step(center, 0));
            assert!(!center_after_one_step(center, 1));
            assert!(center_after_one_step(center, 3));
            for n in 4..=8 {
                assert!(!center_after_one_step(center, n), "n = {}", n);
            }
        }
        assert!(center_after_one_step(true, 2));
        assert!(!center_after_one_step(false, 2));
    }

    #[test]
    fn next_state_matches_b3s23() {
        for n in 0..=8u8 {
            assert_eq!(next_state(false, n), n == 3);
            assert_eq!(next_state(true, n), n == 2 || n == 3);
        }
    }

    fn blinker_layout() -> Vec<Vec<bool>> {
        let mut layout = vec![vec![false; 5]; 5];
        layout[2] = vec![false, true, true, true, false];
        layout
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let start = Grid::from_layout(blinker_layout()).unwrap();

        let (first, alive) = next_generation(&start).unwrap();
        assert!(alive);
        let mut expected = vec![vec![false; 5]; 5];
        for row in expected.iter_mut().take(4).skip(1) {
            row[2] = true;
        }
        assert_eq!(first, Grid::from_layout(expected).unwrap());

        let (second, alive) = next_generation(&first).unwrap();
        assert!(alive);
        assert_eq!(second, start);
    }

    #[test]
    fn dead_grid_stays_dead() {
        let dead = Grid::from_layout(vec![vec![false; 4]; 4]).unwrap();
        let (next, any_alive) = next_generation(&dead).unwrap();
        assert!(!any_alive);
        assert_eq!(next, dead);
    }

    #[test]
    fn advance_is_pure() {
        let a = Grid::from_layout(blinker_layout()).unwrap();
        let b = Grid::from_layout(blinker_layout()).unwrap();
        assert_eq!(next_generation(&a).unwrap(), next_generation(&b).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn lone_cell_on_single_cell_board_dies_of_crowding() {
        // A 1x1 live cell sees itself eight times.
        let grid = Grid::from_layout(vec![vec![true]]).unwrap();
        let (next, any_alive) = next_generation(&grid).unwrap();
        assert!(!any_alive);
        assert_eq!(next.state_at(0, 0), Ok(false));
    }

    #[test]
    fn block_crosses_the_corner_unchanged() {
        // 2x2 block split over all four corners of a 6x6 torus.
        let mut layout = vec![vec![false; 6]; 6];
        for (x, y) in [(0, 0), (5, 0), (0, 5), (5, 5)] {
            layout[y][x] = true;
        }
        let grid = Grid::from_layout(layout).unwrap();
        let (next, _) = next_generation(&grid).unwrap();
        assert_eq!(next, grid);
    }
}
