// engine.rs - Neighbour counting and generation stepping

use crate::{Error, Grid};

impl Grid {
    /// Counts live cells in the 3x3 block around (row, col), clipped at the
    /// grid edges and excluding the cell itself. Always in 0..=8.
    ///
    /// (row, col) must be in bounds.
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        let row_end = self.rows().min(row + 2);
        let col_end = self.cols().min(col + 2);

        let mut count = 0;
        for r in row.saturating_sub(1)..row_end {
            for c in col.saturating_sub(1)..col_end {
                // The cell itself is not its own neighbour
                if (r, c) != (row, col) && self.get(r, c).is_live() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Computes the next generation into a freshly allocated grid of the
    /// same dimensions. The input grid is left untouched.
    pub fn next_generation(&self) -> Result<Grid, Error> {
        if self.rows() == 0 || self.cols() == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut next = Grid::dead(self.rows(), self.cols());
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let state = self.get(row, col).next_state(self.live_neighbours(row, col));
                next.set(row, col, state);
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, patterns};
    use proptest::prelude::*;

    fn grid_with_live(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::dead(rows, cols);
        for &(row, col) in live {
            grid.set(row, col, Cell::Live);
        }
        grid
    }

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.get(row, col).is_live() {
                    live.push((row, col));
                }
            }
        }
        live
    }

    #[test]
    fn isolated_cell_has_no_live_neighbours() {
        let grid = grid_with_live(3, 3, &[(1, 1)]);
        assert_eq!(grid.live_neighbours(1, 1), 0);
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let mut grid = Grid::dead(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, Cell::Live);
            }
        }
        assert_eq!(grid.live_neighbours(1, 1), 8);
    }

    #[test]
    fn counting_clips_at_the_edges() {
        let mut grid = Grid::dead(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                grid.set(row, col, Cell::Live);
            }
        }
        // A corner cell only ever sees three neighbours
        assert_eq!(grid.live_neighbours(0, 0), 3);
        assert_eq!(grid.live_neighbours(1, 1), 3);
    }

    #[test]
    fn single_cell_grid_dies_of_isolation() {
        let grid = grid_with_live(1, 1, &[(0, 0)]);
        assert_eq!(grid.live_neighbours(0, 0), 0);
        let next = grid.next_generation().unwrap();
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert_eq!(Grid::dead(0, 0).next_generation(), Err(Error::EmptyGrid));
        assert_eq!(Grid::dead(3, 0).next_generation(), Err(Error::EmptyGrid));
        assert_eq!(Grid::dead(0, 3).next_generation(), Err(Error::EmptyGrid));
    }

    #[test]
    fn empty_grid_error_message() {
        let err = Grid::dead(0, 5).next_generation().unwrap_err();
        assert_eq!(
            err.to_string(),
            "grid must have a positive number of rows and columns"
        );
    }

    #[test]
    fn dead_centre_is_born_with_exactly_three_live_neighbours() {
        let two = grid_with_live(3, 3, &[(0, 0), (0, 1)]);
        let three = grid_with_live(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        let four = grid_with_live(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert!(!two.next_generation().unwrap().get(1, 1).is_live());
        assert!(three.next_generation().unwrap().get(1, 1).is_live());
        assert!(!four.next_generation().unwrap().get(1, 1).is_live());
    }

    #[test]
    fn live_centre_survival_depends_on_neighbour_count() {
        let cases: &[(&[(usize, usize)], bool)] = &[
            (&[], false),
            (&[(0, 0)], false),
            (&[(0, 0), (0, 1)], true),
            (&[(0, 0), (0, 1), (0, 2)], true),
            (&[(0, 0), (0, 1), (0, 2), (1, 0)], false),
        ];
        for &(neighbours, survives) in cases {
            let mut live = neighbours.to_vec();
            live.push((1, 1));
            let next = grid_with_live(3, 3, &live).next_generation().unwrap();
            assert_eq!(
                next.get(1, 1).is_live(),
                survives,
                "live centre with neighbours {:?}",
                neighbours
            );
        }
    }

    #[test]
    fn five_by_five_demo_first_generation() {
        let grid = grid_with_live(5, 5, &[(1, 3), (2, 2), (2, 3), (3, 3)]);
        let next = grid.next_generation().unwrap();
        assert_eq!(
            live_set(&next),
            vec![(1, 2), (1, 3), (2, 2), (2, 3), (2, 4), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = horizontal.next_generation().unwrap();
        assert_eq!(live_set(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(vertical.next_generation().unwrap(), horizontal);
    }

    proptest! {
        #[test]
        fn next_generation_preserves_dimensions(rows in 1usize..12, cols in 1usize..12, seed: u32) {
            let mut grid = Grid::dead(rows, cols);
            patterns::apply_random_pattern(&mut grid, seed);
            let next = grid.next_generation().unwrap();
            prop_assert_eq!(next.rows(), rows);
            prop_assert_eq!(next.cols(), cols);
        }

        #[test]
        fn next_generation_leaves_input_untouched(rows in 1usize..12, cols in 1usize..12, seed: u32) {
            let mut grid = Grid::dead(rows, cols);
            patterns::apply_random_pattern(&mut grid, seed);
            let snapshot = grid.clone();
            let _ = grid.next_generation().unwrap();
            prop_assert_eq!(grid, snapshot);
        }

        #[test]
        fn all_dead_is_a_fixed_point(rows in 1usize..12, cols in 1usize..12) {
            let next = Grid::dead(rows, cols).next_generation().unwrap();
            prop_assert_eq!(next.live_count(), 0);
        }
    }
}
