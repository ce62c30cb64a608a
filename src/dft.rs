//! Reference 2-D Discrete Fourier Transform.
//! Direct evaluation of the defining sum, `O(rows²·cols²)`.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::fft::{FftDirection, FftError};
use crate::grid::Grid;
use crate::num::{Complex, Float};

/// `exp(sign·2πi·j/n)` for `j = 0..n`.
fn unit_roots<T: Float>(n: usize, sign: T) -> Result<Vec<Complex<T>>, FftError> {
    let len = T::from_usize(n).ok_or(FftError::Overflow)?;
    let two_pi = T::from_i32(2) * T::pi();
    (0..n)
        .map(|j| {
            let j = T::from_usize(j).ok_or(FftError::Overflow)?;
            Ok(Complex::expi(sign * two_pi * j / len))
        })
        .collect()
}

/// Joint 2-D transform over the whole grid, no padding.
///
/// Output cell `(k, l)` is `Σ x(r, c)·exp(sign·2πi·(k·r/rows + l·c/cols))`.
/// The products `k·r` and `l·c` are reduced modulo the axis length before the
/// lookup so large indices do not lose precision.
pub(crate) fn joint_dft<T: Float>(
    grid: &Grid<Complex<T>>,
    direction: FftDirection,
) -> Result<Grid<Complex<T>>, FftError> {
    let (rows, cols) = grid.dims();
    let sign = direction.sign::<T>();
    let row_roots = unit_roots(rows, sign)?;
    let col_roots = unit_roots(cols, sign)?;
    let out = Grid::from_fn(rows, cols, |k, l| {
        let mut sum = Complex::zero();
        for (r, row) in grid.iter_rows().enumerate() {
            let row_factor = row_roots[(k * r) % rows];
            for (c, &x) in row.iter().enumerate() {
                sum += x * row_factor * col_roots[(l * c) % cols];
            }
        }
        sum
    })?;
    Ok(out)
}

/// Naive forward 2-D DFT of an integer (or complex) grid.
///
/// The output has exactly the input dimensions, whatever they are. Use it as
/// a correctness oracle for [`crate::ndfft::fft2d`] on small grids only.
pub fn dft2d<T: Float, V: Copy>(grid: &Grid<V>) -> Result<Grid<Complex<T>>, FftError>
where
    Complex<T>: From<V>,
{
    crate::verbose!("dft2d: naive {}x{} transform", grid.rows(), grid.cols());
    let complex = grid.map(|&v| Complex::from(v));
    joint_dft(&complex, FftDirection::Forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn constant_grid_concentrates_at_origin() {
        let g = Grid::filled(3, 5, 1i32).unwrap();
        let s: Grid<Complex64> = dft2d(&g).unwrap();
        assert_eq!(s.dims(), (3, 5));
        assert!(s[(0, 0)].approx_eq(Complex64::new(15.0, 0.0), 1e-9));
        for r in 0..3 {
            for c in 0..5 {
                if (r, c) != (0, 0) {
                    assert!(s[(r, c)].approx_eq(Complex64::zero(), 1e-9), "({}, {})", r, c);
                }
            }
        }
    }

    #[test]
    fn single_row_matches_one_dimensional_dft() {
        // [1, 2, 3] -> X1 = 1 + 2w + 3w², w = exp(-2πi/3)
        let g = Grid::from_rows(vec![vec![1i32, 2, 3]]).unwrap();
        let s: Grid<Complex64> = dft2d(&g).unwrap();
        let w = Complex64::expi(-2.0 * core::f64::consts::PI / 3.0);
        let x1 = Complex64::new(1.0, 0.0) + w.scale(2.0) + (w * w).scale(3.0);
        assert!(s[(0, 0)].approx_eq(Complex64::new(6.0, 0.0), 1e-9));
        assert!(s[(0, 1)].approx_eq(x1, 1e-9));
        assert!(s[(0, 2)].approx_eq(x1.conj(), 1e-9));
    }

    #[test]
    fn mixed_frequency_terms_use_both_axes() {
        // A single impulse at (1, 1) on a 2x2 grid gives (-1)^(k+l).
        let g = Grid::from_rows(vec![vec![0i32, 0], vec![0, 1]]).unwrap();
        let s: Grid<Complex64> = dft2d(&g).unwrap();
        assert!(s[(0, 0)].approx_eq(Complex64::new(1.0, 0.0), 1e-12));
        assert!(s[(0, 1)].approx_eq(Complex64::new(-1.0, 0.0), 1e-12));
        assert!(s[(1, 0)].approx_eq(Complex64::new(-1.0, 0.0), 1e-12));
        assert!(s[(1, 1)].approx_eq(Complex64::new(1.0, 0.0), 1e-12));
    }

    #[test]
    fn inverse_direction_conjugates_kernel() {
        let g = Grid::from_rows(vec![vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        ]])
        .unwrap();
        let fwd = joint_dft(&g, FftDirection::Forward).unwrap();
        let inv = joint_dft(&g, FftDirection::Inverse).unwrap();
        for c in 0..3 {
            assert!(fwd[(0, c)].conj().approx_eq(inv[(0, c)], 1e-12));
        }
    }
}
