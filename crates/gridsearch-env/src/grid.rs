//! The square occupancy grid searched by the explorer.
//!
//! Blocked cells are stored twice: as [`Cell::BLOCKED`] in the matrix and as
//! a member of exactly one obstacle set (static or dynamic). Every editing
//! operation updates both sides together.

use std::collections::HashSet;

use gridsearch_core::{Cell, Coord};
use gridsearch_paths::Pather;

/// Largest supported side length.
pub const MAX_SIZE: i32 = 1024;

/// A `size`×`size` matrix of [`Cell`] values plus its obstacle sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
    obstacles: HashSet<Coord>,
    dynamic: HashSet<Coord>,
}

impl Grid {
    /// Create a grid with every cell free. Negative sizes give an empty
    /// grid; sizes above [`MAX_SIZE`] are clamped to it.
    pub fn new(size: i32) -> Self {
        let size = size.clamp(0, MAX_SIZE);
        Self {
            size,
            cells: vec![Cell::FREE; (size * size) as usize],
            obstacles: HashSet::new(),
            dynamic: HashSet::new(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.in_square(self.size)
    }

    #[inline]
    fn index(&self, p: Coord) -> usize {
        (p.row * self.size + p.col) as usize
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Coord) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is an in-bounds wall.
    pub fn is_blocked(&self, p: Coord) -> bool {
        self.at(p).is_some_and(Cell::is_blocked)
    }

    /// Static obstacles: walls, maze, trap and toggled cells.
    pub fn obstacles(&self) -> &HashSet<Coord> {
        &self.obstacles
    }

    /// Transient obstacles removed by [`clean_dynamic`](Self::clean_dynamic).
    pub fn dynamic_obstacles(&self) -> &HashSet<Coord> {
        &self.dynamic
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.len() - self.obstacles.len() - self.dynamic.len()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Make `p` a static obstacle. Does nothing if out of bounds.
    pub(crate) fn block(&mut self, p: Coord) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = Cell::BLOCKED;
        self.dynamic.remove(&p);
        self.obstacles.insert(p);
    }

    /// Free `p`, dropping it from both obstacle sets. Does nothing if out of
    /// bounds.
    pub(crate) fn clear(&mut self, p: Coord) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = Cell::FREE;
        self.obstacles.remove(&p);
        self.dynamic.remove(&p);
    }

    /// Block every cell as a static obstacle.
    pub(crate) fn fill_blocked(&mut self) {
        self.cells.fill(Cell::BLOCKED);
        self.dynamic.clear();
        self.obstacles = (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| Coord::new(r, c)))
            .collect();
    }

    /// Block `length` cells of column `col`, downward from `start_row`.
    /// Cells outside the grid are skipped.
    pub fn add_static_wall(&mut self, start_row: i32, col: i32, length: usize) {
        for i in 0..length {
            let row = start_row.saturating_add(i as i32);
            if row >= self.size {
                break;
            }
            self.block(Coord::new(row, col));
        }
    }

    /// Flip one cell between free and blocked. Out-of-bounds calls are
    /// ignored.
    pub fn toggle_obstacle(&mut self, row: i32, col: i32) {
        let p = Coord::new(row, col);
        match self.at(p) {
            Some(c) if c.is_blocked() => self.clear(p),
            Some(_) => self.block(p),
            None => {}
        }
    }

    /// Free every cell and forget all obstacles.
    pub fn reset_grid(&mut self) {
        self.cells.fill(Cell::FREE);
        self.obstacles.clear();
        self.dynamic.clear();
    }

    /// Block a free cell as a transient obstacle. Returns whether it was
    /// placed.
    pub fn add_dynamic_obstacle(&mut self, p: Coord) -> bool {
        match self.at(p) {
            Some(c) if !c.is_blocked() => {
                let i = self.index(p);
                self.cells[i] = Cell::BLOCKED;
                self.dynamic.insert(p);
                true
            }
            _ => false,
        }
    }

    /// Remove every transient obstacle, leaving static ones in place.
    pub fn clean_dynamic(&mut self) {
        for p in std::mem::take(&mut self.dynamic) {
            if !self.obstacles.contains(&p) {
                let i = self.index(p);
                self.cells[i] = Cell::FREE;
            }
        }
    }
}

impl Pather for Grid {
    #[inline]
    fn contains(&self, p: Coord) -> bool {
        Grid::contains(self, p)
    }

    #[inline]
    fn passable(&self, p: Coord) -> bool {
        !self.is_blocked(p)
    }
}

#[cfg(test)]
pub(crate) fn assert_consistent(g: &Grid) {
    for r in 0..g.size() {
        for c in 0..g.size() {
            let p = Coord::new(r, c);
            let in_sets = g.obstacles().contains(&p) as u8 + g.dynamic_obstacles().contains(&p) as u8;
            if g.is_blocked(p) {
                assert_eq!(in_sets, 1, "{p} blocked but tracked {in_sets} times");
            } else {
                assert_eq!(in_sets, 0, "{p} free but tracked");
            }
        }
    }
}
