use gridsearch_core::Coord;

use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::record::VisitRecord;
use crate::traits::Pather;

/// One progress notification, sent for every newly recorded coordinate.
///
/// The vectors are copies taken at the time of the call, so the receiver
/// may keep them after returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The coordinate that was just recorded.
    pub discovered: Coord,
    /// Pending coordinates after `discovered` was queued.
    pub frontier: Vec<Coord>,
    /// Every coordinate recorded so far, root first.
    pub explored: Vec<Coord>,
}

/// Counters for the most recent search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Coordinates whose neighbors were generated.
    pub expanded: usize,
    /// Progress notifications sent.
    pub discovered: usize,
    /// Whether a path was returned.
    pub found: bool,
}

// ---------------------------------------------------------------------------
// Explorer
// ---------------------------------------------------------------------------

/// Entry point for every search.
///
/// `Explorer` owns the neighbor generator so all algorithms share one
/// direction order, plus a scratch buffer reused across runs.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    pub(crate) neighbors: Neighbors,
    pub(crate) nbuf: Vec<Coord>,
    pub(crate) stats: SearchStats,
}

impl Explorer {
    /// Create an explorer using the restricted six-direction adjacency.
    pub fn new() -> Self {
        Self::with_neighbors(Neighbors::new())
    }

    /// Create an explorer around a custom neighbor generator.
    pub fn with_neighbors(neighbors: Neighbors) -> Self {
        Self {
            neighbors,
            nbuf: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }

    /// The traversable neighbors of `p`, in exploration order.
    pub fn neighbors<P: Pather + ?Sized>(&mut self, p: Coord, grid: &P) -> &[Coord] {
        self.neighbors.around(p, grid)
    }

    /// Counters for the last completed run.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Both endpoints are in bounds and passable, or they coincide.
    pub(crate) fn endpoints_open<P>(start: Coord, target: Coord, grid: &P) -> bool
    where
        P: Pather + ?Sized,
    {
        start == target
            || [start, target]
                .iter()
                .all(|&p| grid.contains(p) && grid.passable(p))
    }

    pub(crate) fn begin(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Generate the neighbors of `p` into the taken-out scratch buffer.
    #[inline]
    pub(crate) fn expand<P: Pather + ?Sized>(&mut self, p: Coord, grid: &P, buf: &mut Vec<Coord>) {
        self.stats.expanded += 1;
        buf.clear();
        self.neighbors.fill(p, grid, buf);
    }

    pub(crate) fn emit<M: Copy>(
        &mut self,
        progress: &mut impl FnMut(Step),
        discovered: Coord,
        frontier: &Frontier,
        record: &VisitRecord<M>,
    ) {
        self.stats.discovered += 1;
        log::trace!("discovered {discovered}");
        progress(Step {
            discovered,
            frontier: frontier.snapshot(),
            explored: record.explored(),
        });
    }

    pub(crate) fn finish(&mut self, name: &str, path: Option<Vec<Coord>>) -> Option<Vec<Coord>> {
        self.stats.found = path.is_some();
        log::debug!(
            "{name}: expanded {} discovered {} path {}",
            self.stats.expanded,
            self.stats.discovered,
            path.as_ref().map_or(0, Vec::len),
        );
        path
    }
}
