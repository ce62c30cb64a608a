//! 2-D FFT for pixfft
//!
//! - Separable forward transform (row-column algorithm with transposes)
//! - Inverse transform normalized by the element count
//! - Out-of-place: inputs are borrowed, results are fresh grids
//! - no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::dft::joint_dft;
use crate::fft::{fft, fft_in_place, next_power_of_two, FftDirection, FftError};
use crate::grid::Grid;
use crate::num::{Complex, Float};

/// Transpose of a grid, as a new allocation.
pub fn transpose<V: Copy>(grid: &Grid<V>) -> Grid<V> {
    grid.transpose()
}

/// Forward 2-D FFT.
///
/// Every row is transformed (padding it to `next_power_of_two(cols)`), the
/// result is transposed, every former column is transformed (padding it to
/// `next_power_of_two(rows)`) and the grid is transposed back. The output is
/// therefore `next_power_of_two(rows) x next_power_of_two(cols)`; each axis is
/// rounded up on its own.
pub fn fft2d<T: Float, V: Copy>(grid: &Grid<V>) -> Result<Grid<Complex<T>>, FftError>
where
    Complex<T>: From<V>,
{
    let (rows, cols) = grid.dims();
    let padded_rows = next_power_of_two(rows);
    let padded_cols = next_power_of_two(cols);
    crate::verbose!(
        "fft2d: {}x{} grid padded to {}x{}",
        rows,
        cols,
        padded_rows,
        padded_cols
    );

    // FFT on rows
    let mut row_pass = Vec::with_capacity(rows * padded_cols);
    let mut signal: Vec<Complex<T>> = Vec::with_capacity(cols);
    for row in grid.iter_rows() {
        signal.clear();
        signal.extend(row.iter().map(|&v| Complex::from(v)));
        row_pass.extend(fft(&signal)?);
    }
    let row_pass = Grid::from_vec(rows, padded_cols, row_pass)?;

    // FFT on columns, as rows of the transpose
    let columns = transpose(&row_pass);
    let mut col_pass = Vec::with_capacity(padded_cols * padded_rows);
    for column in columns.iter_rows() {
        col_pass.extend(fft(column)?);
    }
    let col_pass = Grid::from_vec(padded_cols, padded_rows, col_pass)?;

    Ok(transpose(&col_pass))
}

/// Backward radix-2 pass along both axes of a power-of-two grid, unnormalized.
fn backward_radix2<T: Float>(spectrum: &Grid<Complex<T>>) -> Result<Grid<Complex<T>>, FftError> {
    let (rows, cols) = spectrum.dims();
    let mut data = spectrum.as_slice().to_vec();
    for row in data.chunks_exact_mut(cols) {
        fft_in_place(row, FftDirection::Inverse)?;
    }
    let mut columns = Grid::from_vec(rows, cols, data)?.transpose().into_vec();
    for column in columns.chunks_exact_mut(rows) {
        fft_in_place(column, FftDirection::Inverse)?;
    }
    Ok(Grid::from_vec(cols, rows, columns)?.transpose())
}

/// Inverse 2-D transform of a spectrum, normalized by `rows * cols`.
///
/// The output has the dimensions of the spectrum. Power-of-two grids run the
/// radix-2 engine with conjugated twiddles; other sizes (such as spectra from
/// [`crate::dft::dft2d`]) are evaluated with the joint backward sum.
pub fn ifft2d<T: Float>(spectrum: &Grid<Complex<T>>) -> Result<Grid<Complex<T>>, FftError> {
    let (rows, cols) = spectrum.dims();
    let count = rows
        .checked_mul(cols)
        .filter(|&n| n > 0)
        .ok_or(FftError::DegenerateNormalization)?;
    let scale = T::one() / T::from_usize(count).ok_or(FftError::Overflow)?;

    let backward = if rows.is_power_of_two() && cols.is_power_of_two() {
        crate::verbose!("ifft2d: radix-2 backward pass over {}x{}", rows, cols);
        backward_radix2(spectrum)?
    } else {
        crate::verbose!("ifft2d: joint backward sum over {}x{}", rows, cols);
        joint_dft(spectrum, FftDirection::Inverse)?
    };
    Ok(backward.map(|c| c.scale(scale)))
}
