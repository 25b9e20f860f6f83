// grid.rs - Rectangular grid of cells

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Cell, Error};

/// Owned rectangular grid, row-major storage.
///
/// Rectangularity is enforced at construction; zero-dimension grids are
/// valid values but cannot be stepped (see `next_generation`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid with the given dimensions.
    pub fn dead(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Builds a grid from explicit rows, rejecting jagged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(Error::JaggedRows {
                    row,
                    found: cells.len(),
                    expected: cols,
                });
            }
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        self.cells[row * self.cols + col] = state;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let flipped = if self.get(row, col).is_live() {
            Cell::Dead
        } else {
            Cell::Live
        };
        self.set(row, col, flipped);
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Content hash, used by the front-end to detect repeating generations.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One comma-delimited row per line, 0/1 tags
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{},", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
