//! The [`Cell`] type — the occupancy state of one grid square.

/// A grid cell state, wrapping an `i32`.
///
/// `0` is free and `-1` is blocked. Other values are never written by the
/// grid model but are treated as free by the searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// A traversable cell.
    pub const FREE: Cell = Cell(0);
    /// A wall.
    pub const BLOCKED: Cell = Cell(-1);

    /// Get the underlying integer value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        self.0 == Self::BLOCKED.0
    }

    /// The opposite state: free becomes blocked and anything else becomes
    /// free.
    #[inline]
    pub const fn toggled(self) -> Self {
        if self.is_blocked() { Self::FREE } else { Self::BLOCKED }
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}
