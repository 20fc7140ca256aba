/// Number of padding cells on each side of the visible area.
///
/// The padding absorbs edge effects so that cells at the viewport boundary
/// never have artificially truncated neighborhoods. Padding cells are
/// simulated but never drawn.
pub const PADDING: usize = 2;

/// Viewports narrower than this many pixels get the reflected seed pattern.
pub const NARROW_VIEWPORT_THRESHOLD: f32 = 500.;

/// Grid dimensions derived once from the viewport, plus the coordinate
/// transforms between visible and internal (padded) space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub total_rows: usize,
    pub total_cols: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    /// True when the viewport width is below [`NARROW_VIEWPORT_THRESHOLD`].
    pub narrow: bool,
}

impl GridGeometry {
    /// Derives grid dimensions from viewport pixel size and cell size.
    ///
    /// Degenerate viewports (zero or negative extent) yield a padding-only
    /// grid rather than an error; downstream code tolerates empty grids.
    pub fn from_viewport(width: f32, height: f32, cell_size: f32) -> Self {
        let visible_rows = Self::visible_count(height, cell_size);
        let visible_cols = Self::visible_count(width, cell_size);
        Self {
            total_rows: visible_rows + 2 * PADDING,
            total_cols: visible_cols + 2 * PADDING,
            visible_rows,
            visible_cols,
            narrow: width < NARROW_VIEWPORT_THRESHOLD,
        }
    }

    fn visible_count(extent: f32, cell_size: f32) -> usize {
        if extent <= 0. || cell_size <= 0. {
            return 0;
        }
        (extent / cell_size) as usize + 1
    }

    /// Linear hash of an internal coordinate.
    #[inline]
    pub fn hash(&self, row: usize, col: usize) -> u64 {
        (row * self.total_cols + col) as u64
    }

    /// Inverse of [`Self::hash`].
    #[inline]
    pub fn unhash(&self, hash: u64) -> (usize, usize) {
        let hash = hash as usize;
        (hash / self.total_cols, hash % self.total_cols)
    }

    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && row < self.total_rows as i64 && col < self.total_cols as i64
    }

    /// Maps a visible-space coordinate into the padded space.
    #[inline]
    pub fn visible_to_internal(&self, row: usize, col: usize) -> (usize, usize) {
        (row + PADDING, col + PADDING)
    }

    /// Maps an internal coordinate back to visible space.
    ///
    /// Returns `None` for coordinates inside the padding margin.
    #[inline]
    pub fn internal_to_visible(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if (PADDING..PADDING + self.visible_rows).contains(&row)
            && (PADDING..PADDING + self.visible_cols).contains(&col)
        {
            Some((row - PADDING, col - PADDING))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_from_viewport() {
        let g = GridGeometry::from_viewport(600., 450., 15.);
        assert_eq!(g.visible_cols, 41);
        assert_eq!(g.visible_rows, 31);
        assert_eq!(g.total_cols, 45);
        assert_eq!(g.total_rows, 35);
        assert!(!g.narrow);
    }

    #[test]
    fn degenerate_viewport_is_padding_only() {
        let g = GridGeometry::from_viewport(0., 0., 15.);
        assert_eq!(g.visible_rows, 0);
        assert_eq!(g.visible_cols, 0);
        assert_eq!(g.total_rows, 2 * PADDING);
        assert_eq!(g.total_cols, 2 * PADDING);
    }

    #[test]
    fn hash_round_trip() {
        let g = GridGeometry::from_viewport(300., 600., 15.);
        for row in 0..g.total_rows {
            for col in 0..g.total_cols {
                assert_eq!(g.unhash(g.hash(row, col)), (row, col));
            }
        }
    }

    #[test]
    fn visible_internal_transforms() {
        let g = GridGeometry::from_viewport(600., 600., 15.);
        assert_eq!(g.visible_to_internal(0, 0), (PADDING, PADDING));
        assert_eq!(g.internal_to_visible(PADDING, PADDING), Some((0, 0)));
        assert_eq!(
            g.internal_to_visible(PADDING + 3, PADDING + 7),
            Some((3, 7))
        );
        // padding cells have no visible counterpart
        assert_eq!(g.internal_to_visible(0, 5), None);
        assert_eq!(g.internal_to_visible(5, 1), None);
        assert_eq!(g.internal_to_visible(PADDING + g.visible_rows, PADDING), None);
    }

    #[test]
    fn narrow_classification() {
        assert!(GridGeometry::from_viewport(499., 600., 15.).narrow);
        assert!(!GridGeometry::from_viewport(500., 600., 15.).narrow);
    }
}
