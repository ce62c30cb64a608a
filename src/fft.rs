//! Fast Fourier Transform (FFT) algorithms.
//!
//! This module implements the iterative radix-2
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm):
//! the input is zero-padded to the next power of two, reordered with the
//! bit-reversal permutation and then combined stage by stage with butterflies.
//! Twiddle factors are generated per stage by repeated multiplication with
//! `exp(∓2πi / stage)` and never cached between stages or calls.
//!
//! The forward transform is unnormalized. [`ifft`] and the 2-D inverse in
//! [`crate::ndfft`] divide by the element count.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::grid::GridError;
pub use crate::num::{Complex, Complex32, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A signal of length zero has no transform.
    EmptyInput,
    /// An in-place radix-2 pass was handed a buffer whose length is not a power of two.
    NonPowerOfTwo(usize),
    /// The padded length or a size conversion does not fit the numeric types.
    Overflow,
    /// Normalization would divide by a zero element count.
    DegenerateNormalization,
    /// The input grid violates the rectangular, non-empty invariant.
    Grid(GridError),
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "input signal is empty"),
            FftError::NonPowerOfTwo(n) => {
                write!(f, "radix-2 pass requires a power-of-two length, got {}", n)
            }
            FftError::Overflow => write!(f, "transform size overflows the numeric types"),
            FftError::DegenerateNormalization => {
                write!(f, "cannot normalize a transform with zero elements")
            }
            FftError::Grid(e) => write!(f, "malformed grid: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FftError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for FftError {
    fn from(e: GridError) -> Self {
        FftError::Grid(e)
    }
}

/// Sign convention of the exponential kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftDirection {
    /// `exp(-2πi·k·n/N)`
    #[default]
    Forward,
    /// `exp(+2πi·k·n/N)`, i.e. forward twiddles conjugated.
    Inverse,
}

impl FftDirection {
    pub(crate) fn sign<T: Float>(self) -> T {
        match self {
            FftDirection::Forward => -T::one(),
            FftDirection::Inverse => T::one(),
        }
    }
}

/// Smallest power of two `>= n`. Powers of two map to themselves and `0` maps to `1`.
///
/// Saturates at the largest representable power of two instead of wrapping.
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1)
        .checked_next_power_of_two()
        .unwrap_or(1 << (usize::BITS - 1))
}

/// Reverse the low `log2(len)` bits of `index`.
///
/// `len` must be a power of two and `index < len`; both are checked only in
/// debug builds.
pub fn bit_reversed_index(index: usize, len: usize) -> usize {
    debug_assert!(len.is_power_of_two(), "length {} is not a power of two", len);
    debug_assert!(index < len, "index {} out of range for length {}", index, len);
    let bits = len.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Reorder a power-of-two buffer into bit-reversed order.
///
/// Each pair is swapped once, when `i < j`.
pub fn bit_reverse_permute<T: Float>(buf: &mut [Complex<T>]) {
    let n = buf.len();
    for i in 0..n {
        let j = bit_reversed_index(i, n);
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// Butterfly stages over a buffer that is already in bit-reversed order.
fn butterflies<T: Float>(buf: &mut [Complex<T>], direction: FftDirection) -> Result<(), FftError> {
    let n = buf.len();
    let two_pi = T::from_i32(2) * T::pi();
    let sign = direction.sign::<T>();
    let mut stage = 2;
    while stage <= n {
        let half = stage / 2;
        let stage_len = T::from_usize(stage).ok_or(FftError::Overflow)?;
        let step = Complex::expi(sign * two_pi / stage_len);
        for block in buf.chunks_exact_mut(stage) {
            let (top, bottom) = block.split_at_mut(half);
            let mut w = Complex::one();
            for (a, b) in top.iter_mut().zip(bottom.iter_mut()) {
                let t = *b * w;
                *b = *a - t;
                *a = *a + t;
                w *= step;
            }
        }
        stage <<= 1;
    }
    Ok(())
}

/// Unnormalized in-place radix-2 transform of a power-of-two buffer.
///
/// This is the shared engine behind [`fft`], [`ifft`] and the 2-D transforms.
pub fn fft_in_place<T: Float>(
    buf: &mut [Complex<T>],
    direction: FftDirection,
) -> Result<(), FftError> {
    let n = buf.len();
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo(n));
    }
    bit_reverse_permute(buf);
    butterflies(buf, direction)
}

fn padded_copy<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    if input.is_empty() {
        return Err(FftError::EmptyInput);
    }
    let padded = input
        .len()
        .checked_next_power_of_two()
        .ok_or(FftError::Overflow)?;
    let mut buf = vec![Complex::zero(); padded];
    buf[..input.len()].copy_from_slice(input);
    Ok(buf)
}

/// Forward transform of `input` zero-padded to `next_power_of_two(input.len())`.
///
/// The result is **not** length preserving: a length-5 signal yields 8 bins.
/// The input is never modified.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let mut buf = padded_copy(input)?;
    crate::verbose!(
        "fft: {} samples padded to {}",
        input.len(),
        buf.len()
    );
    fft_in_place(&mut buf, FftDirection::Forward)?;
    Ok(buf)
}

/// Inverse of [`fft`] over the padded length, normalized by that length.
pub fn ifft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let mut buf = padded_copy(input)?;
    fft_in_place(&mut buf, FftDirection::Inverse)?;
    let n = T::from_usize(buf.len()).ok_or(FftError::Overflow)?;
    let scale = T::one() / n;
    for c in buf.iter_mut() {
        *c = c.scale(scale);
    }
    Ok(buf)
}
