//! Rectangular grid sub-regions.
//!
//! A region is the unit of parallel work: the evaluator splits the full
//! grid along the slowest-varying axis into disjoint regions, each of which
//! maps to a contiguous range of the flat output buffer.

/// A rectangular block of grid indices: `index[a] ..= index[a] + size[a] - 1`
/// along each axis `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion<const D: usize> {
    /// Smallest contained index per axis.
    pub index: [usize; D],
    /// Extent per axis.
    pub size: [usize; D],
}

impl<const D: usize> GridRegion<D> {
    /// Number of points in the region.
    pub fn num_points(&self) -> usize {
        self.size.iter().product()
    }

    /// Iterates over all indices in flat storage order (axis 0 fastest).
    pub fn iter(&self) -> RegionIter<D> {
        let cursor = if self.num_points() == 0 {
            None
        } else {
            Some(self.index)
        };
        RegionIter {
            region: *self,
            cursor,
        }
    }

    /// Splits the region along its slowest-varying axis into at most
    /// `pieces` sub-regions of near-equal extent.
    ///
    /// Because axis `D - 1` is the slowest-varying storage axis and each
    /// piece spans the full extent of every faster axis, each returned
    /// region covers a contiguous, disjoint range of the flat buffer. Never
    /// returns an empty region; fewer pieces come back when the axis extent
    /// is smaller than requested.
    pub fn split_along_slowest(&self, pieces: usize) -> Vec<GridRegion<D>> {
        let axis = D - 1;
        let extent = self.size[axis];
        if extent == 0 {
            return Vec::new();
        }
        let pieces = pieces.clamp(1, extent);
        let base = extent / pieces;
        let remainder = extent % pieces;

        let mut regions = Vec::with_capacity(pieces);
        let mut start = self.index[axis];
        for piece in 0..pieces {
            let thickness = base + usize::from(piece < remainder);
            let mut sub = *self;
            sub.index[axis] = start;
            sub.size[axis] = thickness;
            regions.push(sub);
            start += thickness;
        }
        regions
    }
}

/// Odometer iterator over a region's indices, fastest axis first.
pub struct RegionIter<const D: usize> {
    region: GridRegion<D>,
    cursor: Option<[usize; D]>,
}

impl<const D: usize> Iterator for RegionIter<D> {
    type Item = [usize; D];

    fn next(&mut self) -> Option<[usize; D]> {
        let current = self.cursor?;
        let mut next = current;
        let mut axis = 0;
        loop {
            if axis == D {
                self.cursor = None;
                break;
            }
            next[axis] += 1;
            if next[axis] < self.region.index[axis] + self.region.size[axis] {
                self.cursor = Some(next);
                break;
            }
            next[axis] = self.region.index[axis];
            axis += 1;
        }
        Some(current)
    }
}
