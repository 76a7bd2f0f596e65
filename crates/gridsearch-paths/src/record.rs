//! Visitation records and path reconstruction.

use std::collections::HashMap;

use gridsearch_core::Coord;

/// How a coordinate was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<M> {
    /// Predecessor, `None` for the root.
    pub parent: Option<Coord>,
    /// Accumulated cost, depth, or `()`.
    pub meta: M,
}

/// Coordinate → [`Visit`] map for one search run.
///
/// A coordinate is inserted once, and afterwards only replaced when its
/// `meta` strictly improves, so predecessor chains always end at the root.
/// First-insertion order is kept for explored snapshots.
#[derive(Debug, Clone)]
pub struct VisitRecord<M = ()> {
    entries: HashMap<Coord, Visit<M>>,
    order: Vec<Coord>,
}

impl<M: Copy> VisitRecord<M> {
    /// A record holding only `root`.
    pub fn rooted(root: Coord, meta: M) -> Self {
        let mut entries = HashMap::new();
        entries.insert(root, Visit { parent: None, meta });
        Self {
            entries,
            order: vec![root],
        }
    }

    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.entries.contains_key(&p)
    }

    #[inline]
    pub fn get(&self, p: Coord) -> Option<&Visit<M>> {
        self.entries.get(&p)
    }

    #[inline]
    pub fn meta(&self, p: Coord) -> Option<M> {
        self.entries.get(&p).map(|v| v.meta)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Record `p` as reached from `parent` unless it is already known.
    /// Returns whether it was inserted.
    pub fn discover(&mut self, p: Coord, parent: Coord, meta: M) -> bool {
        if self.entries.contains_key(&p) {
            return false;
        }
        self.entries.insert(
            p,
            Visit {
                parent: Some(parent),
                meta,
            },
        );
        self.order.push(p);
        true
    }

    /// Every recorded coordinate in first-insertion order.
    pub fn explored(&self) -> Vec<Coord> {
        self.order.clone()
    }

    /// Walk predecessor links from `p` to the root, `p` first.
    ///
    /// Returns `None` if `p` was never recorded.
    pub fn chain(&self, p: Coord) -> Option<Vec<Coord>> {
        let mut cur = self.entries.get(&p).map(|_| p);
        let mut out = Vec::new();
        while let Some(c) = cur {
            out.push(c);
            cur = self.entries.get(&c).and_then(|v| v.parent);
        }
        if out.is_empty() { None } else { Some(out) }
    }

    /// The route from the root to `goal`, both inclusive.
    pub fn path_to(&self, goal: Coord) -> Option<Vec<Coord>> {
        let mut path = self.chain(goal)?;
        path.reverse();
        Some(path)
    }
}

impl<M: Copy + Ord> VisitRecord<M> {
    /// Record `p` via `parent` if it is new or `meta` is strictly smaller
    /// than what is recorded. Returns whether the record changed.
    pub fn improve(&mut self, p: Coord, parent: Coord, meta: M) -> bool {
        match self.entries.get_mut(&p) {
            Some(v) if meta < v.meta => {
                v.parent = Some(parent);
                v.meta = meta;
                true
            }
            Some(_) => false,
            None => self.discover(p, parent, meta),
        }
    }
}

/// Join a forward record (rooted at the start) and a backward record (rooted
/// at the target) at a coordinate both of them know.
pub fn join_paths<A: Copy, B: Copy>(
    forward: &VisitRecord<A>,
    backward: &VisitRecord<B>,
    meeting: Coord,
) -> Option<Vec<Coord>> {
    let mut path = forward.path_to(meeting)?;
    let back = backward.chain(meeting)?;
    path.extend(back.into_iter().skip(1));
    Some(path)
}
