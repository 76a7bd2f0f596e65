//! Small in-memory grid used by the unit tests of this crate.

use std::collections::HashSet;

use gridsearch_core::Coord;

use crate::neighbors::is_adjacent;
use crate::traits::Pather;

pub(crate) struct TestGrid {
    size: i32,
    walls: HashSet<Coord>,
}

impl TestGrid {
    pub(crate) fn open(size: i32) -> Self {
        Self {
            size,
            walls: HashSet::new(),
        }
    }

    /// `#` is a wall, anything else is floor. Rows must be equally long.
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut walls = HashSet::new();
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "test grids are square");
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    walls.insert(Coord::new(r as i32, c as i32));
                }
            }
        }
        Self {
            size: rows.len() as i32,
            walls,
        }
    }

    pub(crate) fn free_cells(&self) -> usize {
        (self.size * self.size) as usize - self.walls.len()
    }
}

impl Pather for TestGrid {
    fn contains(&self, p: Coord) -> bool {
        p.in_square(self.size)
    }

    fn passable(&self, p: Coord) -> bool {
        !self.walls.contains(&p)
    }
}

/// Panics unless `path` runs from `start` to `target` through distinct,
/// adjacent, passable cells.
pub(crate) fn assert_valid_path(grid: &TestGrid, path: &[Coord], start: Coord, target: Coord) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&target));
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "repeated cell in {path:?}");
    for w in path.windows(2) {
        assert!(is_adjacent(w[0], w[1]), "{} -> {} is not a move", w[0], w[1]);
    }
    for &p in &path[1..] {
        assert!(grid.contains(p) && grid.passable(p));
    }
}
