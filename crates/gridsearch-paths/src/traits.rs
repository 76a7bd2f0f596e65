use gridsearch_core::Coord;

/// Minimal occupancy interface the searches read from.
pub trait Pather {
    /// Whether `p` lies inside the grid.
    fn contains(&self, p: Coord) -> bool;

    /// Whether `p` can be entered. Only asked for points that are contained.
    fn passable(&self, p: Coord) -> bool;
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn contains(&self, p: Coord) -> bool {
        (**self).contains(p)
    }

    #[inline]
    fn passable(&self, p: Coord) -> bool {
        (**self).passable(p)
    }
}
