//! Plain-text grid layouts.
//!
//! A layout is a square block of text, one line per row, where `#` is a wall
//! and `.` is a free cell. Walls read from a layout become static obstacles.

use std::fmt;

use gridsearch_core::{Cell, Coord};

use crate::grid::{Grid, MAX_SIZE};

pub const WALL_CHAR: char = '#';
pub const FREE_CHAR: char = '.';

impl Grid {
    /// Parse a layout. Leading and trailing whitespace of the whole text is
    /// ignored, as is trailing whitespace on each line.
    pub fn from_ascii(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(LayoutError::Empty);
        }
        let size = lines.len();
        if size > MAX_SIZE as usize {
            return Err(LayoutError::TooLarge(size));
        }
        let mut grid = Grid::new(size as i32);
        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(LayoutError::NotSquare { row: r, width, size });
            }
            for (c, ch) in line.chars().enumerate() {
                let p = Coord::new(r as i32, c as i32);
                match ch {
                    WALL_CHAR => grid.block(p),
                    FREE_CHAR => {}
                    _ => return Err(LayoutError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(grid)
    }

    /// Render the grid as a layout that [`from_ascii`](Self::from_ascii)
    /// reads back.
    pub fn to_ascii(&self) -> String {
        self.to_ascii_with(|_, cell| if cell.is_blocked() { WALL_CHAR } else { FREE_CHAR })
    }

    /// Render the grid choosing each character with `glyph`.
    pub fn to_ascii_with(&self, mut glyph: impl FnMut(Coord, Cell) -> char) -> String {
        let mut out = String::with_capacity((self.size() * (self.size() + 1)) as usize);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for (c, &cell) in row.iter().enumerate() {
                out.push(glyph(Coord::new(r as i32, c as i32), cell));
            }
        }
        out
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare { row: usize, width: usize, size: usize },
    /// More rows than [`MAX_SIZE`].
    TooLarge(usize),
    /// A character other than `#` or `.`.
    InvalidChar { ch: char, pos: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout: no rows"),
            Self::NotSquare { row, width, size } => {
                write!(f, "layout: row {row} has width {width}, expected {size}")
            }
            Self::TooLarge(n) => write!(f, "layout: {n} rows exceeds {MAX_SIZE}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
