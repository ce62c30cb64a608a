//! Dominant frequency extraction.
//!
//! Turns a complex field into sinusoidal components: every cell whose
//! magnitude is strictly above a threshold becomes a [`SpectralComponent`]
//! with its amplitude, phase and per-axis angular frequency.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::fft::FftError;
use crate::grid::Grid;
use crate::num::{Complex, Float};

/// Threshold used when the caller has no better value.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One cell of a complex field seen as a sinusoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralComponent<T: Float> {
    pub row: usize,
    pub col: usize,
    /// `sqrt(re² + im²)`, never negative.
    pub amplitude: T,
    /// `atan2(im, re)` in `(-π, π]`.
    pub phase: T,
    /// Angular frequency `(2π·row/rows, 2π·col/cols)`.
    pub frequency: (T, T),
}

impl<T: Float> SpectralComponent<T> {
    /// Value of `amplitude·cos(ω_r·r + ω_c·c + phase)` at grid position `(r, c)`.
    pub fn sample(&self, r: T, c: T) -> T {
        let angle = self.frequency.0 * r + self.frequency.1 * c + self.phase;
        let (_, cos) = angle.sin_cos();
        self.amplitude * cos
    }
}

/// Lazy row-major scan produced by [`dominant_frequencies`].
///
/// Finite and not restartable; build a new one to scan again.
#[derive(Clone, Debug)]
pub struct DominantFrequencies<'a, T: Float> {
    field: &'a Grid<Complex<T>>,
    threshold: T,
    row_step: T,
    col_step: T,
    next: usize,
}

impl<'a, T: Float> DominantFrequencies<'a, T> {
    fn component(&self, index: usize, value: Complex<T>, amplitude: T) -> Option<SpectralComponent<T>> {
        let cols = self.field.cols();
        let (row, col) = (index / cols, index % cols);
        let mut phase = value.arg();
        if phase <= -T::pi() {
            phase = T::pi();
        }
        Some(SpectralComponent {
            row,
            col,
            amplitude,
            phase,
            frequency: (
                self.row_step * T::from_usize(row)?,
                self.col_step * T::from_usize(col)?,
            ),
        })
    }
}

impl<T: Float> Iterator for DominantFrequencies<'_, T> {
    type Item = SpectralComponent<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.field.as_slice();
        while self.next < cells.len() {
            let index = self.next;
            self.next += 1;
            let value = cells[index];
            let amplitude = value.norm();
            if amplitude > self.threshold {
                return self.component(index, value, amplitude);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.field.len() - self.next))
    }
}

impl<T: Float> FusedIterator for DominantFrequencies<'_, T> {}

/// Scan `field` for cells with amplitude strictly above `threshold`.
///
/// Components come out in row-major order. An all-zero field yields nothing
/// for any non-negative threshold.
pub fn dominant_frequencies<T: Float>(
    field: &Grid<Complex<T>>,
    threshold: T,
) -> Result<DominantFrequencies<'_, T>, FftError> {
    let (rows, cols) = field.dims();
    let two_pi = T::from_i32(2) * T::pi();
    let row_step = two_pi / T::from_usize(rows).ok_or(FftError::Overflow)?;
    let col_step = two_pi / T::from_usize(cols).ok_or(FftError::Overflow)?;
    Ok(DominantFrequencies {
        field,
        threshold,
        row_step,
        col_step,
        next: 0,
    })
}

/// Components above `threshold` ordered by decreasing amplitude, at most `limit`.
///
/// Equal amplitudes keep their row-major order.
pub fn strongest<T: Float>(
    field: &Grid<Complex<T>>,
    threshold: T,
    limit: usize,
) -> Result<Vec<SpectralComponent<T>>, FftError> {
    let mut components: Vec<_> = dominant_frequencies(field, threshold)?.collect();
    components.sort_by(|a, b| {
        b.amplitude
            .partial_cmp(&a.amplitude)
            .unwrap_or(Ordering::Equal)
    });
    components.truncate(limit);
    Ok(components)
}
