//! End-to-end analysis of a binary pixel grid.
//!
//! pixels → thinning → 2-D FFT → inverse → dominant frequency extraction.

use alloc::vec::Vec;

use crate::fft::FftError;
use crate::grid::Grid;
use crate::ndfft::{fft2d, ifft2d};
use crate::num::Complex64;
use crate::spectral::{dominant_frequencies, strongest, SpectralComponent, DEFAULT_THRESHOLD};
use crate::thinning::{ensure_binary, skeletonize, ThinningReport};

/// Which field the components are extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentSource {
    /// The inverse transform of the spectrum.
    #[default]
    Reconstruction,
    /// The forward spectrum itself.
    Spectrum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Amplitude a cell must strictly exceed to be reported.
    pub threshold: f64,
    /// Run Zhang-Suen thinning before the transform.
    pub thin: bool,
    pub source: ComponentSource,
    /// Keep only the `n` strongest components, ordered by amplitude.
    pub limit: Option<usize>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            thin: true,
            source: ComponentSource::default(),
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The grid that was transformed (thinned unless disabled).
    pub skeleton: Grid<u8>,
    pub thinning: Option<ThinningReport>,
    /// `next_power_of_two(rows) x next_power_of_two(cols)` forward spectrum.
    pub spectrum: Grid<Complex64>,
    /// Inverse of `spectrum`, the zero-padded skeleton up to rounding.
    pub reconstruction: Grid<Complex64>,
    pub components: Vec<SpectralComponent<f64>>,
}

/// Run the full pipeline on a copy of `pixels`; the caller's grid is untouched.
pub fn analyze(pixels: &Grid<u8>, options: &AnalysisOptions) -> Result<Analysis, FftError> {
    ensure_binary(pixels)?;
    let mut skeleton = pixels.clone();
    let thinning = if options.thin {
        Some(skeletonize(&mut skeleton)?)
    } else {
        None
    };

    let spectrum: Grid<Complex64> = fft2d(&skeleton)?;
    let reconstruction = ifft2d(&spectrum)?;

    let field = match options.source {
        ComponentSource::Reconstruction => &reconstruction,
        ComponentSource::Spectrum => &spectrum,
    };
    let components = match options.limit {
        Some(limit) => strongest(field, options.threshold, limit)?,
        None => dominant_frequencies(field, options.threshold)?.collect(),
    };
    crate::verbose!(
        "analyze: {} components above {}",
        components.len(),
        options.threshold
    );

    Ok(Analysis {
        skeleton,
        thinning,
        spectrum,
        reconstruction,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridError;

    fn bar() -> Grid<u8> {
        Grid::from_fn(5, 9, |r, c| u8::from((1..4).contains(&r) && (1..8).contains(&c))).unwrap()
    }

    #[test]
    fn reconstruction_reports_skeleton_pixels() {
        let analysis = analyze(&bar(), &AnalysisOptions::default()).unwrap();
        assert_eq!(analysis.spectrum.dims(), (8, 16));
        assert_eq!(analysis.reconstruction.dims(), (8, 16));
        let report = analysis.thinning.unwrap();
        assert_eq!(report.removed, 17);
        let cells: Vec<_> = analysis.components.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(cells, [(2, 2), (2, 3), (2, 4), (2, 5)]);
        for c in &analysis.components {
            assert!((c.amplitude - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn thinning_can_be_disabled() {
        let options = AnalysisOptions {
            thin: false,
            ..AnalysisOptions::default()
        };
        let analysis = analyze(&bar(), &options).unwrap();
        assert!(analysis.thinning.is_none());
        assert_eq!(analysis.skeleton, bar());
        assert_eq!(analysis.components.len(), 21);
    }

    #[test]
    fn spectrum_source_with_limit_keeps_strongest() {
        // A horizontal 4-pixel line puts its full energy on every (k, 0) bin.
        let options = AnalysisOptions {
            source: ComponentSource::Spectrum,
            limit: Some(3),
            ..AnalysisOptions::default()
        };
        let analysis = analyze(&bar(), &options).unwrap();
        assert_eq!(analysis.components.len(), 3);
        for c in &analysis.components {
            assert_eq!(c.col, 0);
            assert!((c.amplitude - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn input_grid_is_not_modified() {
        let pixels = bar();
        let copy = pixels.clone();
        analyze(&pixels, &AnalysisOptions::default()).unwrap();
        assert_eq!(pixels, copy);
    }

    #[test]
    fn non_binary_input_fails_before_transform() {
        let mut pixels = bar();
        pixels[(0, 0)] = 7;
        let err = analyze(&pixels, &AnalysisOptions::default()).unwrap_err();
        assert_eq!(err, FftError::Grid(GridError::NonBinary { row: 0, col: 0 }));
    }
}
