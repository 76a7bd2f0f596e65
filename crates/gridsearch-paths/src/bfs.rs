use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::{Discipline, Frontier};
use crate::record::VisitRecord;
use crate::traits::Pather;

impl Explorer {
    /// Breadth-first search from `start` to `target`.
    ///
    /// The goal test runs when a coordinate leaves the queue, so the target
    /// is reported through `progress` before it is recognised. Returns a
    /// path with the fewest moves, or `None` if `target` is unreachable.
    pub fn bfs<P, F>(&mut self, start: Coord, target: Coord, grid: &P, mut progress: F) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("bfs", None);
        }
        let mut frontier = Frontier::seeded(Discipline::Fifo, start);
        let mut record = VisitRecord::rooted(start, ());
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((current, _)) = frontier.pop() else {
                break 'search false;
            };
            if current == target {
                break 'search true;
            }

            self.expand(current, grid, &mut nbuf);
            for &n in nbuf.iter() {
                if record.discover(n, current, ()) {
                    frontier.push(n, 0);
                    self.emit(&mut progress, n, &frontier, &record);
                }
            }
        };

        self.nbuf = nbuf;
        let path = if found { record.path_to(target) } else { None };
        self.finish("bfs", path)
    }
}
