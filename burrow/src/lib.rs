//! Thick-wall maze generation.
//!
//! [`algorithms::generate`] carves a perfect maze into a grid of walls by randomized depth-first
//! backtracking and opens an entrance and an exit on its outer ring. The result is a read-only
//! [`Maze`], renderers only query it.

pub mod algorithms;
pub mod array;
pub mod cell;
pub mod dims;
pub mod maze;

pub use algorithms::{generate, BoundaryPolicy, Generator, GeneratorError};
pub use cell::CellState;
pub use dims::Dims;
pub use maze::Maze;
