//! Environment settings: grid size, endpoints, depth bounds and the
//! initial wall.

use std::fmt;

use gridsearch_core::Coord;
use gridsearch_paths::{Algorithm, DEFAULT_DLS_LIMIT, DEFAULT_MAX_DEPTH};

use crate::grid::{Grid, MAX_SIZE};

/// A vertical wall placed with [`Grid::add_static_wall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSpec {
    pub start_row: i32,
    pub col: i32,
    pub length: usize,
}

/// Settings for one exploration environment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnvConfig {
    /// Side length of the grid.
    pub size: i32,
    pub start: Coord,
    pub target: Coord,
    /// Depth limit for depth-limited search.
    pub dls_limit: u32,
    /// Iteration bound for iterative deepening.
    pub max_depth: u32,
    /// Wall placed on a fresh grid, if any.
    pub wall: Option<WallSpec>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            size: 20,
            start: Coord::new(2, 2),
            target: Coord::new(17, 17),
            dls_limit: DEFAULT_DLS_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
            wall: Some(WallSpec {
                start_row: 5,
                col: 5,
                length: 10,
            }),
        }
    }
}

impl EnvConfig {
    /// Check that the grid is non-empty and both endpoints are inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::EmptyGrid(self.size));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::TooLarge(self.size));
        }
        for (name, p) in [("start", self.start), ("target", self.target)] {
            if !p.in_square(self.size) {
                return Err(ConfigError::OutOfBounds {
                    name,
                    pos: p,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// A fresh grid with the configured wall, if any.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new(self.size);
        if let Some(w) = self.wall {
            grid.add_static_wall(w.start_row, w.col, w.length);
        }
        grid
    }

    /// Apply the configured depth bounds to `algorithm`.
    pub fn bounded(&self, algorithm: Algorithm) -> Algorithm {
        algorithm.with_bounds(self.dls_limit, self.max_depth)
    }
}

/// Errors reported by [`EnvConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid size is zero or negative.
    EmptyGrid(i32),
    /// Grid size exceeds [`MAX_SIZE`].
    TooLarge(i32),
    /// An endpoint lies outside the grid.
    OutOfBounds {
        name: &'static str,
        pos: Coord,
        size: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid(n) => write!(f, "config: grid size must be positive, got {n}"),
            Self::TooLarge(n) => write!(f, "config: grid size {n} exceeds {MAX_SIZE}"),
            Self::OutOfBounds { name, pos, size } => {
                write!(f, "config: {name} {pos} is outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
