//! Obstacle generators.
//!
//! Provides two layouts:
//! - **Maze**: randomized depth-first backtracking that carves one-cell
//!   corridors on even coordinates, leaving walls between them.
//! - **Trap**: a ring of walls around one cell with a single opening.

use gridsearch_core::Coord;
use gridsearch_paths::LEFT;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::Grid;

/// Carving moves: two cells at a time so a wall cell stays between
/// corridors.
const CARVE_DIRS: [Coord; 4] = [
    Coord::new(0, 2),
    Coord::new(0, -2),
    Coord::new(2, 0),
    Coord::new(-2, 0),
];

/// The side of a trap left open, relative to its anchor.
pub const TRAP_OPENING: Coord = LEFT;

/// The cells [`Grid::generate_trap`] blocks around `around`, before
/// clipping: the eight surrounding cells except the opening.
pub fn trap_cells(around: Coord) -> impl Iterator<Item = Coord> {
    let opening = around + TRAP_OPENING;
    around.ring().into_iter().filter(move |&p| p != opening)
}

/// One pending carve position with its shuffled move order.
struct Frame {
    at: Coord,
    dirs: [Coord; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(at: Coord, rng: &mut R) -> Self {
        let mut dirs = CARVE_DIRS;
        dirs.shuffle(rng);
        Self { at, dirs, next: 0 }
    }
}

impl Grid {
    /// Replace the grid with a random maze.
    ///
    /// Both corners `(0, 0)` and `(n-1, n-1)` are left free, together with
    /// the interior anchors `(2, 2)` and `(n-3, n-3)`.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.size();
        self.generate_maze_with_anchors(rng, &[Coord::new(2, 2), Coord::new(n - 3, n - 3)]);
    }

    /// Replace the grid with a random maze, forcing both corners and every
    /// in-bounds coordinate of `anchors` free afterwards.
    pub fn generate_maze_with_anchors<R: Rng + ?Sized>(&mut self, rng: &mut R, anchors: &[Coord]) {
        self.fill_blocked();
        if self.size() == 0 {
            return;
        }
        self.carve(Coord::ZERO, rng);

        let n = self.size();
        let corners = [Coord::ZERO, Coord::new(n - 1, n - 1)];
        for &p in corners.iter().chain(anchors) {
            self.clear(p);
        }
        log::debug!(
            "maze {n}x{n}: {} free, {} walls",
            self.free_count(),
            self.obstacles().len()
        );
    }

    /// Depth-first backtracking from `origin` with an explicit stack.
    fn carve<R: Rng + ?Sized>(&mut self, origin: Coord, rng: &mut R) {
        self.clear(origin);
        let mut stack = vec![Frame::new(origin, rng)];

        while let Some(top) = stack.last_mut() {
            if top.next == top.dirs.len() {
                stack.pop();
                continue;
            }
            let d = top.dirs[top.next];
            top.next += 1;
            let from = top.at;

            let to = from + d;
            if self.is_blocked(to) {
                self.clear(from.shift(d.row / 2, d.col / 2));
                self.clear(to);
                stack.push(Frame::new(to, rng));
            }
        }
    }

    /// Replace the grid with a trap around `around`: every surrounding cell
    /// is blocked except the one on the [`TRAP_OPENING`] side. Cells outside
    /// the grid are skipped.
    pub fn generate_trap(&mut self, around: Coord) {
        self.reset_grid();
        for p in trap_cells(around) {
            self.block(p);
        }
        log::debug!("trap around {around}: {} walls", self.obstacles().len());
    }
}
