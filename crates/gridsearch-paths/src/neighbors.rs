use gridsearch_core::Coord;

use crate::traits::Pather;

pub const UP: Coord = Coord::new(-1, 0);
pub const RIGHT: Coord = Coord::new(0, 1);
pub const DOWN: Coord = Coord::new(1, 0);
pub const DOWN_RIGHT: Coord = Coord::new(1, 1);
pub const LEFT: Coord = Coord::new(0, -1);
pub const UP_LEFT: Coord = Coord::new(-1, -1);

/// The six permitted moves, in exploration priority order.
///
/// Up-right and down-left are not moves. The set is closed under negation,
/// so adjacency is symmetric and a backward search walks the same edges.
pub const RESTRICTED_DIRS: [Coord; 6] = [UP, RIGHT, DOWN, DOWN_RIGHT, LEFT, UP_LEFT];

/// Neighbor generator shared by every search.
///
/// Holds the ordered direction set and a scratch buffer so repeated queries
/// do not allocate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dirs: &'static [Coord],
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a generator using [`RESTRICTED_DIRS`].
    pub fn new() -> Self {
        Self::with_directions(&RESTRICTED_DIRS)
    }

    /// Create a generator using another ordered direction set.
    pub fn with_directions(dirs: &'static [Coord]) -> Self {
        Self {
            dirs,
            buf: Vec::with_capacity(dirs.len()),
        }
    }

    /// The direction set in priority order.
    #[inline]
    pub fn directions(&self) -> &'static [Coord] {
        self.dirs
    }

    /// Append the traversable neighbors of `p` into `buf`, in direction
    /// order. The caller clears `buf` before calling.
    pub fn fill<P: Pather + ?Sized>(&self, p: Coord, grid: &P, buf: &mut Vec<Coord>) {
        for &d in self.dirs {
            let n = p + d;
            if grid.contains(n) && grid.passable(n) {
                buf.push(n);
            }
        }
    }

    /// Return the traversable neighbors of `p` in direction order.
    pub fn around<P: Pather + ?Sized>(&mut self, p: Coord, grid: &P) -> &[Coord] {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.fill(p, grid, &mut buf);
        self.buf = buf;
        &self.buf
    }

    /// Whether a single move leads from `from` to `to`, ignoring occupancy.
    #[inline]
    pub fn is_step(&self, from: Coord, to: Coord) -> bool {
        self.dirs.contains(&(to - from))
    }
}

/// Ordered traversable neighbors of `p` under [`RESTRICTED_DIRS`].
pub fn get_neighbors<P: Pather + ?Sized>(p: Coord, grid: &P) -> Vec<Coord> {
    let mut out = Vec::with_capacity(RESTRICTED_DIRS.len());
    Neighbors::new().fill(p, grid, &mut out);
    out
}

/// Whether `a` and `b` are adjacent under [`RESTRICTED_DIRS`].
#[inline]
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    RESTRICTED_DIRS.contains(&(b - a))
}
