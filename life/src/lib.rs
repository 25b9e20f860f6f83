// lib.rs - Core engine for Conway's Game of Life

mod cell;
mod engine;
mod error;
mod grid;
pub mod patterns;

pub use cell::Cell;
pub use error::Error;
pub use grid::Grid;
