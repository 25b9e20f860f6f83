// cell.rs - Cell states and the per-cell transition rule

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Dead,
    Live,
}

impl Cell {
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    /// Next state of a cell given its number of live neighbours.
    pub fn next_state(self, live_neighbours: u8) -> Cell {
        match (self, live_neighbours) {
            (Cell::Live, 2) | (Cell::Live, 3) => Cell::Live,  // Survival
            (Cell::Dead, 3)                   => Cell::Live,  // Birth
            _                                 => Cell::Dead,  // Death or stays dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_live() { "1" } else { "0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_only_with_two_or_three_neighbours() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { Cell::Live } else { Cell::Dead };
            assert_eq!(Cell::Live.next_state(n), expected, "live cell, {} neighbours", n);
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_exactly_three_neighbours() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Live } else { Cell::Dead };
            assert_eq!(Cell::Dead.next_state(n), expected, "dead cell, {} neighbours", n);
        }
    }
}
