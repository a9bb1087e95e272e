// grid.rs - Bounded, double-buffered grid for Conway's Game of Life

use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::{debug, trace};

use crate::cell::Cell;

// Relative positions of the 8 surrounding cells
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A fixed-size rectangle of cells addressed by `(x, y)` with
/// `0 <= x < width` and `0 <= y < height`.
///
/// Positions outside the rectangle do not exist: cells on the edge simply
/// have fewer neighbours, there is no wraparound.
///
/// Cells are stored row-major. [`Grid::tick`] writes the next generation into
/// a second buffer of the same size and swaps it in, so every transition is
/// evaluated against the same prior generation.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {width}x{height}");
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        }
    }

    /// Creates a grid and immediately reseeds it from `rng`.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.reseed_with(rng);
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn assert_in_bounds(&self, x: usize, y: usize) {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.assert_in_bounds(x, y);
        y * self.width + x
    }

    /// State of the cell at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn state_at(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// State of the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[y * self.width + x])
    }

    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Flips the cell at `(x, y)` and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Cell {
        let i = self.index(x, y);
        self.cells[i] = if self.cells[i].is_alive() { Cell::Dead } else { Cell::Alive };
        self.cells[i]
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells among the up to 8 cells surrounding `(x, y)`.
    ///
    /// Neighbour positions that fall outside the grid are not counted, so a
    /// corner has at most 3 candidates and an edge cell at most 5.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn neighbour_count(&self, x: usize, y: usize) -> u8 {
        self.assert_in_bounds(x, y);
        let mut count = 0;
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.contains(nx, ny) && self.cells[ny * self.width + nx].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advances the grid by one generation.
    pub fn tick(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                let next_state = self.cells[i].next(self.neighbour_count(x, y));
                self.next[i] = next_state;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        trace!(population = self.population(), "generation advanced");
    }

    /// Reseeds every cell from the thread-local RNG.
    pub fn reseed(&mut self) {
        self.reseed_with(&mut rand::rng());
    }

    /// Gives every cell an independent state, alive with probability 0.5.
    pub fn reseed_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(0.5));
        }
        debug!(
            width = self.width,
            height = self.height,
            population = self.population(),
            "grid reseeded"
        );
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Every coordinate with its state, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % width, i / width, cell))
    }

    /// Coordinates of the live cells.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

// The scratch buffer is not part of a grid's value.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.cells.hash(state);
    }
}
