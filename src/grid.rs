//! Rectangular row-major grids.
//!
//! A [`Grid`] always satisfies `rows >= 1`, `cols >= 1` and equal row lengths.
//! The constructors validate this once so the transforms never re-check it.

use alloc::vec::Vec;
use core::fmt;

/// Structural problems detected while building or validating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without any columns.
    Empty,
    /// Row `row` has `found` cells while the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat storage does not hold `rows * cols` values.
    MismatchedLengths { expected: usize, found: usize },
    /// `rows * cols` does not fit in `usize`.
    Overflow,
    /// A pixel outside `{0, 1}` was handed to a binary-only stage.
    NonBinary { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row and one column"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            GridError::MismatchedLengths { expected, found } => {
                write!(f, "expected {} grid values, found {}", expected, found)
            }
            GridError::Overflow => write!(f, "grid dimensions overflow usize"),
            GridError::NonBinary { row, col } => {
                write!(f, "pixel ({}, {}) is neither 0 nor 1", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<V> {
    rows: usize,
    cols: usize,
    data: Vec<V>,
}

impl<V> Grid<V> {
    /// Build a grid from nested rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let n_rows = rows.len();
        let data: Vec<V> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Wrap row-major storage of `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<V>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows.checked_mul(cols).ok_or(GridError::Overflow)?;
        if data.len() != expected {
            return Err(GridError::MismatchedLengths {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> V,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let len = rows.checked_mul(cols).ok_or(GridError::Overflow)?;
        let mut data = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: an empty grid cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&V> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut V> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[V] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> core::slice::Chunks<'_, V> {
        self.data.chunks(self.cols)
    }

    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<V> {
        self.data
    }

    pub fn map<U>(&self, f: impl FnMut(&V) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<V: Copy> Grid<V> {
    /// A `rows x cols` grid filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: V) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_, _| value)
    }

    /// Swap rows and columns into a newly allocated grid.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<V> core::ops::Index<(usize, usize)> for Grid<V> {
    type Output = V;
    fn index(&self, (row, col): (usize, usize)) -> &V {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<V> core::ops::IndexMut<(usize, usize)> for Grid<V> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut V {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl<V> TryFrom<Vec<Vec<V>>> for Grid<V> {
    type Error = GridError;
    fn try_from(rows: Vec<Vec<V>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

/// One row per line, cells separated by a space. Precision is forwarded to
/// every cell, so `{:.3}` prints three decimals throughout.
impl<V: fmt::Display> fmt::Display for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, cell)?,
                    None => write!(f, "{}", cell)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.dims(), (2, 3));
        assert_eq!(g[(1, 0)], 4);
        assert_eq!(g.row(0), &[1, 2, 3]);
        assert_eq!(g.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Grid::<i32>::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::<i32>::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(Grid::<i32>::from_vec(0, 3, vec![]), Err(GridError::Empty));
        assert_eq!(Grid::filled(2, 0, 0u8), Err(GridError::Empty));
    }

    #[test]
    fn from_vec_checks_length_and_overflow() {
        assert_eq!(
            Grid::from_vec(2, 2, vec![1, 2, 3]),
            Err(GridError::MismatchedLengths {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Grid::<u8>::from_vec(usize::MAX, 2, vec![]),
            Err(GridError::Overflow)
        );
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = g.transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.row(0), &[1, 4]);
        assert_eq!(t.row(2), &[3, 6]);
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut g = Grid::filled(2, 2, 0u8).unwrap();
        assert!(g.get(2, 0).is_none());
        assert!(g.get(0, 2).is_none());
        *g.get_mut(1, 1).unwrap() = 1;
        assert_eq!(g[(1, 1)], 1);
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let g = Grid::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(format!("{}", g), "0 1\n1 0");
        let f = Grid::from_rows(vec![vec![0.5f64, 1.0]]).unwrap();
        assert_eq!(format!("{:.2}", f), "0.50 1.00");
    }
}
