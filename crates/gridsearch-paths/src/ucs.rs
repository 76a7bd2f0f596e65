use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::{Discipline, Frontier};
use crate::record::VisitRecord;
use crate::traits::Pather;

/// Cost of a single move.
pub const STEP_COST: u32 = 1;

impl Explorer {
    /// Uniform-cost search from `start` to `target`.
    ///
    /// Every move costs [`STEP_COST`]. A coordinate is queued again whenever
    /// a strictly cheaper route to it is recorded; outdated queue entries
    /// stay in the heap and are dropped when popped.
    pub fn ucs<P, F>(&mut self, start: Coord, target: Coord, grid: &P, mut progress: F) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("ucs", None);
        }
        let mut frontier = Frontier::seeded(Discipline::Priority, start);
        let mut record = VisitRecord::rooted(start, 0u32);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((current, cost)) = frontier.pop() else {
                break 'search false;
            };
            // Skip stale entries.
            if record.meta(current).is_some_and(|best| cost > best) {
                continue;
            }
            if current == target {
                break 'search true;
            }

            self.expand(current, grid, &mut nbuf);
            let next = cost + STEP_COST;
            for &n in nbuf.iter() {
                if record.improve(n, current, next) {
                    frontier.push(n, next);
                    self.emit(&mut progress, n, &frontier, &record);
                }
            }
        };

        self.nbuf = nbuf;
        let path = if found { record.path_to(target) } else { None };
        self.finish("ucs", path)
    }
}
