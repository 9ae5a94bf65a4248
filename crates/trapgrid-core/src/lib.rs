//! Core types for trap-grid routing: coordinates, cells and the grid.
//!
//! This crate provides the foundational types shared by the search and
//! generation crates: geometry primitives, the three-valued map [`Cell`],
//! and the square [`Grid`] the agent moves on.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
