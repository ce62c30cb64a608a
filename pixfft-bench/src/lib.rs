//! Shared inputs for the pixfft benchmarks.

use pixfft::{Complex32, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random binary canvas with roughly one pixel in `1 / density` set.
pub fn random_canvas(rows: usize, cols: usize, density: u32) -> Grid<u8> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    Grid::from_fn(rows, cols, |_, _| u8::from(rng.gen_ratio(1, density.max(1))))
        .expect("canvas dimensions must be non-zero")
}

pub fn random_signal(len: usize) -> Vec<Complex32> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len)
        .map(|_| Complex32::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}
