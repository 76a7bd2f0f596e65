//! Grid environment for the gridsearch explorer: occupancy grid with
//! obstacle tracking, wall editing, maze and trap generation, text layouts.

pub mod config;
pub mod grid;
pub mod layout;
pub mod mapgen;

#[cfg(test)]
mod scenarios;

pub use config::{ConfigError, EnvConfig, WallSpec};
pub use grid::{Grid, MAX_SIZE};
pub use layout::LayoutError;
pub use mapgen::{TRAP_OPENING, trap_cells};
