// cell.rs - Cell state and the Life transition rule

/// State of a single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// State of this cell in the next generation given its live neighbour count.
    ///
    /// The rule depends only on the current state and the count, so every cell
    /// can be evaluated independently against the previous generation.
    pub fn next(self, neighbours: u8) -> Cell {
        match (self, neighbours) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
            (Cell::Dead, 3)                     => Cell::Alive,  // Birth
            _                                   => Cell::Dead,   // Isolation, overcrowding, or stays dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_with_two_or_three() {
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
    }

    #[test]
    fn live_cell_dies_of_isolation() {
        assert_eq!(Cell::Alive.next(0), Cell::Dead);
        assert_eq!(Cell::Alive.next(1), Cell::Dead);
    }

    #[test]
    fn live_cell_dies_of_overcrowding() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.next(n), Cell::Dead, "neighbours = {n}");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_exactly_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "neighbours = {n}");
        }
    }

    #[test]
    fn default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
        assert_eq!(Cell::from(true), Cell::Alive);
    }
}
