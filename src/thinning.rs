//! Zhang-Suen thinning of binary pixel grids.
//!
//! Reduces foreground blobs (`1`) to 1-pixel-wide skeletons by repeatedly
//! deleting boundary pixels in two alternating sub-phases. The grid is
//! modified in place and never resized; pixels only ever go from `1` to `0`.
//! Pixels on the outer border of the grid are never deleted.

use alloc::vec::Vec;

use crate::grid::{Grid, GridError};

/// Clockwise neighbour offsets starting at the top: P2, P3, ..., P9.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The two sub-iterations of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Removes south-east boundary and north-west corner pixels.
    One,
    /// Removes north-west boundary and south-east corner pixels.
    Two,
}

/// Outcome of [`skeletonize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThinningReport {
    /// Full iterations run, including the final one that deleted nothing.
    pub iterations: usize,
    /// Foreground pixels cleared.
    pub removed: usize,
}

/// The eight neighbours P2..P9 of `(row, col)`, or `None` for border pixels.
pub fn neighbors(grid: &Grid<u8>, row: usize, col: usize) -> Option<[u8; 8]> {
    let mut out = [0u8; 8];
    for (slot, &(dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        *slot = *grid.get(r, c)?;
    }
    Some(out)
}

fn should_delete(grid: &Grid<u8>, row: usize, col: usize, phase: Phase) -> bool {
    if grid[(row, col)] == 0 {
        return false;
    }
    let Some(p) = neighbors(grid, row, col) else {
        return false;
    };

    let black = p.iter().filter(|&&v| v == 1).count();
    if !(2..=6).contains(&black) {
        return false;
    }

    // Exactly one 0 -> 1 transition around the closed loop P2..P9, P2.
    let transitions = (0..8).filter(|&i| p[i] == 0 && p[(i + 1) % 8] == 1).count();
    if transitions != 1 {
        return false;
    }

    let [p2, _, p4, _, p6, _, p8, _] = p;
    match phase {
        Phase::One => (p2 == 0 || p4 == 0 || p6 == 0) && (p4 == 0 || p6 == 0 || p8 == 0),
        Phase::Two => (p2 == 0 || p4 == 0 || p8 == 0) && (p2 == 0 || p6 == 0 || p8 == 0),
    }
}

/// Every pixel the given sub-phase would delete, in row-major order.
///
/// Marks are computed against the unmodified grid.
pub fn marked_pixels(grid: &Grid<u8>, phase: Phase) -> Vec<(usize, usize)> {
    let mut marked = Vec::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if should_delete(grid, r, c, phase) {
                marked.push((r, c));
            }
        }
    }
    marked
}

fn clear(grid: &mut Grid<u8>, marked: &[(usize, usize)]) {
    for &(r, c) in marked {
        grid[(r, c)] = 0;
    }
}

/// Check that every pixel is `0` or `1`.
pub fn ensure_binary(grid: &Grid<u8>) -> Result<(), GridError> {
    match grid.as_slice().iter().position(|&v| v > 1) {
        Some(i) => Err(GridError::NonBinary {
            row: i / grid.cols(),
            col: i % grid.cols(),
        }),
        None => Ok(()),
    }
}

/// Thin `grid` in place until an iteration deletes nothing in both sub-phases.
pub fn skeletonize(grid: &mut Grid<u8>) -> Result<ThinningReport, GridError> {
    ensure_binary(grid)?;
    let mut report = ThinningReport::default();
    loop {
        report.iterations += 1;
        let first = marked_pixels(grid, Phase::One);
        clear(grid, &first);
        let second = marked_pixels(grid, Phase::Two);
        clear(grid, &second);
        report.removed += first.len() + second.len();
        if first.is_empty() && second.is_empty() {
            break;
        }
    }
    crate::verbose!(
        "skeletonize: {} iterations, {} pixels removed",
        report.iterations,
        report.removed
    );
    Ok(report)
}
