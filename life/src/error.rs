// error.rs - Errors raised at the core's boundary

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Stepping a grid with zero rows or zero columns.
    #[error("grid must have a positive number of rows and columns")]
    EmptyGrid,

    /// Building a grid from rows of unequal length.
    #[error("row {row} has {found} columns, expected {expected}")]
    JaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },
}
