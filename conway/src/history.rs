// history.rs - Detects when the simulation revisits a recent generation

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// Number of generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring of fingerprints of the most recent generations.
///
/// A repeat means the grid has settled into a still life or an oscillator
/// with period at most [`HISTORY_LEN`].
#[derive(Clone, Debug, Default)]
pub struct History {
    recent: [u64; HISTORY_LEN],
    count: usize,
}

pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and returns `true` if it matches one of the remembered
    /// generations. A repeated generation is not recorded again.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = fingerprint(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.recent[..filled].contains(&hash) {
            return true;
        }
        self.recent[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.recent = [0; HISTORY_LEN];
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::patterns::{apply_pattern, find_pattern};

    #[test]
    fn still_life_repeats_immediately() {
        let mut grid = Grid::new(6, 6);
        apply_pattern(&mut grid, find_pattern("Block").unwrap());
        let mut history = History::new();
        assert!(!history.record(&grid));
        grid.tick();
        assert!(history.record(&grid));
    }

    #[test]
    fn blinker_repeats_after_two() {
        let mut grid = Grid::new(7, 7);
        apply_pattern(&mut grid, find_pattern("Blinker").unwrap());
        let mut history = History::new();
        assert!(!history.record(&grid));
        grid.tick();
        assert!(!history.record(&grid));
        grid.tick();
        assert!(history.record(&grid));
    }

    #[test]
    fn empty_history_never_matches() {
        // An all-zero slot must not count as a remembered generation.
        let mut history = History::new();
        assert!(!history.record(&Grid::new(1, 1)));
    }

    #[test]
    fn old_generations_are_forgotten() {
        let mut history = History::new();
        let first = Grid::new(4, 4);
        history.record(&first);
        for i in 0..HISTORY_LEN {
            let mut grid = Grid::new(4, 4);
            grid.set(i % 4, i / 4, Cell::Alive);
            assert!(!history.record(&grid));
        }
        assert!(!history.record(&first));
    }

    #[test]
    fn clear_forgets_everything() {
        let grid = Grid::new(3, 3);
        let mut history = History::new();
        history.record(&grid);
        history.clear();
        assert!(!history.record(&grid));
    }
}
