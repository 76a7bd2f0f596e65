use gridsearch_core::Coord;

use crate::explorer::{Explorer, Step};
use crate::frontier::{Discipline, Frontier};
use crate::record::VisitRecord;
use crate::traits::Pather;

impl Explorer {
    /// Iterative depth-first search from `start` to `target`.
    ///
    /// Neighbors are pushed in reverse direction order so the first
    /// direction is popped first. A coordinate is recorded when pushed and
    /// never pushed again. The path is not necessarily short.
    pub fn dfs<P, F>(&mut self, start: Coord, target: Coord, grid: &P, mut progress: F) -> Option<Vec<Coord>>
    where
        P: Pather + ?Sized,
        F: FnMut(Step),
    {
        self.begin();
        if !Self::endpoints_open(start, target, grid) {
            return self.finish("dfs", None);
        }
        let mut frontier = Frontier::seeded(Discipline::Lifo, start);
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
            for &n in nbuf.iter().rev() {
                if record.discover(n, current, ()) {
                    frontier.push(n, 0);
                    self.emit(&mut progress, n, &frontier, &record);
                }
            }
        };

        self.nbuf = nbuf;
        let path = if found { record.path_to(target) } else { None };
        self.finish("dfs", path)
    }
}
