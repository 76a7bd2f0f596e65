//! Geometry primitive: [`Coord`].
//!
//! Coordinates are addressed as (row, column) with rows growing downward,
//! which is how the search grid is laid out and printed.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A (row, column) grid coordinate. Also used for relative offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether the coordinate lies inside a `size`×`size` square anchored
    /// at the origin.
    #[inline]
    pub const fn in_square(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// The eight surrounding coordinates, clockwise from up.
    #[inline]
    pub fn ring(self) -> [Coord; 8] {
        [
            self.shift(-1, 0),
            self.shift(-1, 1),
            self.shift(0, 1),
            self.shift(1, 1),
            self.shift(1, 0),
            self.shift(1, -1),
            self.shift(0, -1),
            self.shift(-1, -1),
        ]
    }

    /// Chebyshev distance; 1 means the two coordinates touch.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

// --- trait impls for Coord ---

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(3, 4);
        let b = Coord::new(1, 2);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(a - b, Coord::new(2, 2));
        assert_eq!(-b, Coord::new(-1, -2));
        assert_eq!(a.shift(-1, 1), Coord::new(2, 5));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn in_square_bounds() {
        assert!(Coord::new(0, 0).in_square(3));
        assert!(Coord::new(2, 2).in_square(3));
        assert!(!Coord::new(3, 0).in_square(3));
        assert!(!Coord::new(0, -1).in_square(3));
        assert!(!Coord::ZERO.in_square(0));
    }

    #[test]
    fn ring_touches_center() {
        let c = Coord::new(5, 5);
        for p in c.ring() {
            assert_eq!(p.chebyshev(c), 1);
        }
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Coord = (2, 7).into();
        assert_eq!(c.to_string(), "(2, 7)");
    }
}
