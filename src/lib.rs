//! # pixfft - Fourier analysis of binary pixel grids
//!
//! Computes frequency-domain representations of 2-D integer grids (typically
//! hand-drawn strokes thinned to a skeleton) and recovers the dominant
//! sinusoidal components.
//!
//! ## Features
//!
//! - **Iterative radix-2 FFT** with power-of-two padding and bit-reversal reordering
//! - **Separable 2-D FFT** via row passes and transposes; each axis pads independently
//! - **Reference 2-D DFT** straight from the defining sum, for validation
//! - **Self-contained inverse** normalized by the element count
//! - **Dominant frequency extraction** as a lazy row-major iterator
//! - **Zhang-Suen thinning** for preparing stroke images
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls for the error types
//! - `verbose-logging`: emit `log` records from the transforms
//!
//! ## Example
//!
//! ```
//! use pixfft::grid::Grid;
//! use pixfft::ndfft::{fft2d, ifft2d};
//! use pixfft::spectral::dominant_frequencies;
//! use pixfft::Complex64;
//!
//! let pixels = Grid::from_rows(vec![vec![1, 1, 1, 1]; 4]).unwrap();
//! let spectrum: Grid<Complex64> = fft2d(&pixels).unwrap();
//! assert!((spectrum[(0, 0)].re - 16.0).abs() < 1e-9);
//!
//! let field = ifft2d(&spectrum).unwrap();
//! assert_eq!(dominant_frequencies(&field, 0.1).unwrap().count(), 16);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Forward a `log::debug!` record when `verbose-logging` is enabled.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}
pub(crate) use verbose;

pub mod fft;
/// Floating point abstraction and complex arithmetic.
pub mod num;

/// Rectangular grids and their validation errors.
pub mod grid;

/// 2-D fast transforms
///
/// Separable forward FFT, transpose and the normalized inverse.
pub mod ndfft;

/// Reference 2-D DFT
///
/// Direct evaluation of the defining sum for correctness checks.
pub mod dft;

/// Dominant frequency extraction
///
/// Amplitude, phase and angular frequency of every cell above a threshold.
pub mod spectral;

/// Zhang-Suen thinning
///
/// Skeletonization of binary grids, done in place.
pub mod thinning;

/// Thinning, transform, inverse and extraction in one call.
pub mod pipeline;

pub use fft::{FftDirection, FftError};
pub use grid::{Grid, GridError};
pub use num::{Complex, Complex32, Complex64, Float};
pub use spectral::{SpectralComponent, DEFAULT_THRESHOLD};
