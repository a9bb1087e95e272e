// patterns.rs - Named seed patterns

use tracing::debug;

use crate::cell::Cell;
use crate::grid::Grid;

/// A seed shape given as `(x, y)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width, height)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Looks a pattern up by name, ignoring ASCII case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Clears `grid` and places `pattern` in its centre.
///
/// Cells that would land outside a grid smaller than the pattern are dropped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let (width, height) = pattern.extent();
    let origin_x = grid.width().saturating_sub(width) / 2;
    let origin_y = grid.height().saturating_sub(height) / 2;

    for &(dx, dy) in pattern.cells {
        let (x, y) = (origin_x + dx, origin_y + dy);
        if grid.contains(x, y) {
            grid.set(x, y, Cell::Alive);
        }
    }
    debug!(pattern = pattern.name, population = grid.population(), "pattern applied");
}
