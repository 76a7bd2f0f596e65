use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::{Discipline, Frontier};
use crate::record::{VisitRecord, join_paths};
use crate::traits::Pather;

impl Explorer {
    /// Bidirectional breadth-first search.
    ///
    /// One queue grows from `start` and one from `target`. Each round expands
    /// one coordinate forward, then one backward, until either queue runs
    /// dry. The first coordinate one side discovers that the other side
    /// already recorded joins the two halves. The result is not always the
    /// shortest path.
    pub fn bidirectional<P, F>(
        &mut self,
        start: Coord,
        target: Coord,
        grid: &P,
        mut progress: F,
    ) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if start == target {
            return self.finish("bidirectional", Some(vec![start]));
        }
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("bidirectional", None);
        }

        let mut fwd = Frontier::seeded(Discipline::Fifo, start);
        let mut bwd = Frontier::seeded(Discipline::Fifo, target);
        let mut fwd_rec = VisitRecord::rooted(start, ());
        let mut bwd_rec = VisitRecord::rooted(target, ());
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let meeting = loop {
            if fwd.is_empty() || bwd.is_empty() {
                break None;
            }
            if let Some(m) = self.half_step(&mut fwd, &mut fwd_rec, &bwd_rec, grid, &mut nbuf, &mut progress) {
                break Some(m);
            }
            if let Some(m) = self.half_step(&mut bwd, &mut bwd_rec, &fwd_rec, grid, &mut nbuf, &mut progress) {
                break Some(m);
            }
        };

        self.nbuf = nbuf;
        let path = meeting.and_then(|m| {
            log::trace!("bidirectional: met at {m}");
            join_paths(&fwd_rec, &bwd_rec, m)
        });
        self.finish("bidirectional", path)
    }

    /// Expand one coordinate of one side. Returns the meeting coordinate if
    /// a discovery is already known to `other`.
    fn half_step<P>(
        &mut self,
        frontier: &mut Frontier,
        record: &mut VisitRecord,
        other: &VisitRecord,
        grid: &P,
        nbuf: &mut Vec<Coord>,
        progress: &mut impl FnMut(Step),
    ) -> Option<Coord>
    where
        P: Pather + ?Sized,
    {
        let (current, _) = frontier.pop()?;
        self.expand(current, grid, nbuf);
        for &n in nbuf.iter() {
            if record.discover(n, current, ()) {
                frontier.push(n, 0);
                self.emit(progress, n, &*frontier, &*record);
                if other.contains(n) {
                    return Some(n);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::{TestGrid, assert_valid_path};

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    #[test]
    fn same_cell_is_trivial() {
        let g = TestGrid::open(3);
        let mut ex = Explorer::new();
        let mut calls = 0;
        assert_eq!(ex.bidirectional(c(1, 1), c(1, 1), &g, |_| calls += 1), Some(vec![c(1, 1)]));
        assert_eq!(calls, 0);
    }

    #[test]
    fn adjacent_cells_meet_immediately() {
        let g = TestGrid::open(3);
        let mut ex = Explorer::new();
        let path = ex.bidirectional(c(0, 0), c(0, 1), &g, |_| {}).unwrap();
        assert_eq!(path, vec![c(0, 0), c(0, 1)]);
        assert_eq!(ex.stats().expanded, 1);
    }

    #[test]
    fn alternates_forward_and_backward() {
        let g = TestGrid::open(9);
        let mut ex = Explorer::new();
        let start = c(0, 0);
        let target = c(8, 8);
        let mut roots = Vec::new();
        ex.bidirectional(start, target, &g, |s| roots.push(s.explored[0]));
        // The first expansion of each side announces three neighbors.
        assert_eq!(&roots[..3], &[start; 3]);
        assert_eq!(&roots[3..6], &[target; 3]);
    }

    #[test]
    fn joined_path_is_valid() {
        let g = TestGrid::from_rows(&[
            ".......",
            ".#####.",
            ".....#.",
            "####.#.",
            ".....#.",
            ".######",
            ".......",
        ]);
        let mut ex = Explorer::new();
        let path = ex.bidirectional(c(6, 6), c(2, 0), &g, |_| {}).unwrap();
        assert_valid_path(&g, &path, c(6, 6), c(2, 0));
        let shortest = ex.bfs(c(6, 6), c(2, 0), &g, |_| {}).unwrap();
        assert!(path.len() >= shortest.len());
    }

    #[test]
    fn stops_when_one_side_is_sealed() {
        let g = TestGrid::from_rows(&[
            ".....",
            ".....",
            ".....",
            "...##",
            "...#.",
        ]);
        let mut ex = Explorer::new();
        assert_eq!(ex.bidirectional(c(0, 0), c(4, 4), &g, |_| {}), None);
    }

    #[test]
    fn wall_target_is_not_expanded() {
        let g = TestGrid::from_rows(&[
            "....",
            "....",
            "....",
            "...#",
        ]);
        let mut ex = Explorer::new();
        let mut calls = 0;
        assert_eq!(ex.bidirectional(c(0, 0), c(3, 3), &g, |_| calls += 1), None);
        assert_eq!(calls, 0);
        assert_eq!(ex.bidirectional(c(3, 3), c(3, 3), &g, |_| {}), Some(vec![c(3, 3)]));
    }
}
