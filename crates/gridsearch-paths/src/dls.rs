use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::{Discipline, Frontier};
use crate::record::VisitRecord;
use crate::traits::Pather;

impl Explorer {
    /// Depth-limited search from `start` to `target`.
    ///
    /// Coordinates at depth `limit` are goal-tested but not expanded, so any
    /// returned path has at most `limit` moves. A coordinate already seen is
    /// pushed again when reached at a strictly shallower depth.
    pub fn dls<P, F>(
        &mut self,
        start: Coord,
        target: Coord,
        grid: &P,
        limit: u32,
        mut progress: F,
    ) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("dls", None);
        }
        let path = self.depth_limited(start, target, grid, limit, &mut progress);
        self.finish("dls", path)
    }

    /// Iterative-deepening search: depth-limited runs with limits
    /// `0..max_depth`, stopping at the first that reaches `target`.
    ///
    /// Each run starts from scratch, so `progress` sees shallow coordinates
    /// once per iteration.
    pub fn iddfs<P, F>(
        &mut self,
        start: Coord,
        target: Coord,
        grid: &P,
        max_depth: u32,
        mut progress: F,
    ) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("iddfs", None);
        }
        for limit in 0..max_depth {
            if let Some(path) = self.depth_limited(start, target, grid, limit, &mut progress) {
                log::trace!("iddfs: reached {target} at limit {limit}");
                return self.finish("iddfs", Some(path));
            }
        }
        self.finish("iddfs", None)
    }

    fn depth_limited<P>(
        &mut self,
        start: Coord,
        target: Coord,
        grid: &P,
        limit: u32,
        progress: &mut impl FnMut(Step),
    ) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
    {
        let mut frontier = Frontier::seeded(Discipline::DepthLifo, start);
        let mut record = VisitRecord::rooted(start, 0u32);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((current, depth)) = frontier.pop() else {
                break 'search false;
            };
            // A shallower entry for this coordinate was pushed later and
            // has already been handled.
            if record.meta(current).is_some_and(|best| depth > best) {
                continue;
            }
            if current == target {
                break 'search true;
            }
            if depth >= limit {
                continue;
            }

            self.expand(current, grid, &mut nbuf);
            for &n in nbuf.iter().rev() {
                if record.improve(n, current, depth + 1) {
                    frontier.push(n, depth + 1);
                    self.emit(progress, n, &frontier, &record);
                }
            }
        };

        self.nbuf = nbuf;
        if found { record.path_to(target) } else { None }
    }
}
