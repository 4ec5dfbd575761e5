//! Named starting layouts, each already square and padded with dead cells.

/// A literal layout, one string per row: `#` is alive, anything else dead.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn layout(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect()
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    rows: &[".....", ".....", ".###.", ".....", "....."],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    rows: &[
        "......",
        ".##...",
        ".##...",
        "...##.",
        "...##.",
        "......",
    ],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    rows: &[
        "......",
        "......",
        "..###.",
        ".###..",
        "......",
        "......",
    ],
};

// Travels diagonally and wraps around the board indefinitely.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ],
};

pub const PATTERNS: &[Pattern] = &[BLINKER, BEACON, TOAD, GLIDER];

/// Looks up a pattern by name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::next_generation;
    use crate::grid::Grid;

    #[test]
    fn every_pattern_builds_a_grid() {
        for pattern in PATTERNS {
            let grid = Grid::from_layout(pattern.layout()).unwrap();
            assert!(grid.any_alive(), "{} is empty", pattern.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(by_name("Beacon").map(|p| p.name), Some("beacon"));
        assert!(by_name("spaceship").is_none());
        assert_eq!(names().count(), PATTERNS.len());
    }

    #[test]
    fn oscillators_return_after_two_generations() {
        for pattern in [BLINKER, BEACON, TOAD] {
            let start = Grid::from_layout(pattern.layout()).unwrap();
            let (first, _) = next_generation(&start).unwrap();
            let (second, _) = next_generation(&first).unwrap();
            assert_ne!(first, start, "{}", pattern.name);
            assert_eq!(second, start, "{}", pattern.name);
        }
    }

    #[test]
    fn glider_wraps_back_to_its_start() {
        // A glider moves one cell diagonally every four generations, so on
        // an 8x8 torus it is home after 32.
        let start = Grid::from_layout(GLIDER.layout()).unwrap();
        let mut grid = start.clone();
        for _ in 0..32 {
            let (next, alive) = next_generation(&grid).unwrap();
            assert!(alive);
            assert_eq!(next.population(), 5);
            grid = next;
        }
        assert_eq!(grid, start);
    }
}
