//! Frontier disciplines.
//!
//! Every search keeps its pending coordinates in a [`Frontier`]; the variant
//! decides which coordinate comes out next.

use std::collections::{BinaryHeap, VecDeque};

use gridsearch_core::Coord;

/// Which order a [`Frontier`] releases its entries in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Smallest key first, ties broken by coordinate order.
    Priority,
    /// Last in, first out, each entry tagged with its depth.
    DepthLifo,
}

/// Priority-queue entry ordered so that `BinaryHeap` pops the cheapest
/// (then lowest coordinate) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Queued {
    pub cost: u32,
    pub pos: Coord,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending coordinates of one search run.
///
/// Entries carry a key: accumulated cost for [`Discipline::Priority`], depth
/// for [`Discipline::DepthLifo`]. The plain queue and stack ignore it and
/// hand back `0`.
#[derive(Debug, Clone)]
pub enum Frontier {
    Fifo(VecDeque<Coord>),
    Lifo(Vec<Coord>),
    Priority(BinaryHeap<Queued>),
    DepthLifo(Vec<(Coord, u32)>),
}

impl Frontier {
    /// Create an empty frontier with the given discipline.
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fifo => Self::Fifo(VecDeque::new()),
            Discipline::Lifo => Self::Lifo(Vec::new()),
            Discipline::Priority => Self::Priority(BinaryHeap::new()),
            Discipline::DepthLifo => Self::DepthLifo(Vec::new()),
        }
    }

    /// Create a frontier holding only `root` with key 0.
    pub fn seeded(discipline: Discipline, root: Coord) -> Self {
        let mut f = Self::new(discipline);
        f.push(root, 0);
        f
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            Self::Fifo(_) => Discipline::Fifo,
            Self::Lifo(_) => Discipline::Lifo,
            Self::Priority(_) => Discipline::Priority,
            Self::DepthLifo(_) => Discipline::DepthLifo,
        }
    }

    pub fn push(&mut self, p: Coord, key: u32) {
        match self {
            Self::Fifo(q) => q.push_back(p),
            Self::Lifo(s) => s.push(p),
            Self::Priority(h) => h.push(Queued { cost: key, pos: p }),
            Self::DepthLifo(s) => s.push((p, key)),
        }
    }

    /// Remove the next entry and its key.
    pub fn pop(&mut self) -> Option<(Coord, u32)> {
        match self {
            Self::Fifo(q) => q.pop_front().map(|p| (p, 0)),
            Self::Lifo(s) => s.pop().map(|p| (p, 0)),
            Self::Priority(h) => h.pop().map(|e| (e.pos, e.cost)),
            Self::DepthLifo(s) => s.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(q) => q.len(),
            Self::Lifo(s) => s.len(),
            Self::Priority(h) => h.len(),
            Self::DepthLifo(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the pending coordinates, stale duplicates included.
    ///
    /// Queue order for FIFO, bottom-to-top for the stacks. The priority
    /// variant reports heap storage order, which is unspecified.
    pub fn snapshot(&self) -> Vec<Coord> {
        match self {
            Self::Fifo(q) => q.iter().copied().collect(),
            Self::Lifo(s) => s.clone(),
            Self::Priority(h) => h.iter().map(|e| e.pos).collect(),
            Self::DepthLifo(s) => s.iter().map(|&(p, _)| p).collect(),
        }
    }
}
