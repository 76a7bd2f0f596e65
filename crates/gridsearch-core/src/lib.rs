//! **gridsearch-core** — foundational types for the grid search explorer.
//!
//! Provides the (row, column) [`Coord`] used as a map/set key throughout the
//! search engine, and the integer [`Cell`] occupancy state stored by the grid.

pub mod cell;
pub mod geom;

pub use cell::Cell;
pub use geom::Coord;
