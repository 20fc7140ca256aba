/// Glider offsets, rows top-down.
const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Offset of the seed pattern from the padded origin.
const ORIGIN: (usize, usize) = (4, 4);

/// Internal coordinates of the fixed seed pattern.
///
/// On narrow viewports the pattern is reflected across its diagonal
/// (row/col swap), an orientation better suited to a vertically-elongated
/// viewport.
pub fn glider(narrow: bool) -> Vec<(usize, usize)> {
    GLIDER
        .iter()
        .map(|&(row, col)| {
            let (row, col) = if narrow { (col, row) } else { (row, col) };
            (ORIGIN.0 + row, ORIGIN.1 + col)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_swaps_rows_and_cols() {
        let mut wide = glider(false);
        let mut reflected = glider(true)
            .into_iter()
            .map(|(row, col)| (col, row))
            .collect::<Vec<_>>();
        wide.sort_unstable();
        reflected.sort_unstable();
        assert_eq!(wide, reflected);
    }
}
