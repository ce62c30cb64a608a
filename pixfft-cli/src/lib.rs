use clap::ValueEnum;
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, GrayImage, ImageBuffer, ImageEncoder, Rgb, RgbImage,
};
use pixfft::grid::{Grid, GridError};
use pixfft::{Complex64, SpectralComponent};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Fallback for `--threshold`.
pub const THRESHOLD_ENV: &str = "PIXFFT_THRESHOLD";
/// Fallback for `--luma`.
pub const FOREGROUND_LUMA_ENV: &str = "PIXFFT_FOREGROUND_LUMA";
/// Pixels darker than this count as ink.
pub const DEFAULT_FOREGROUND_LUMA: u8 = 128;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMap {
    Gray,
    Viridis,
    Inferno,
}

pub fn env_threshold() -> Option<f64> {
    std::env::var(THRESHOLD_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
}

pub fn env_foreground_luma() -> Option<u8> {
    std::env::var(FOREGROUND_LUMA_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
}

/// Dark pixels (luma strictly below `cutoff`) become `1`, the rest `0`.
pub fn binarize(img: &GrayImage, cutoff: u8) -> Result<Grid<u8>, GridError> {
    let (width, height) = img.dimensions();
    Grid::from_fn(height as usize, width as usize, |r, c| {
        u8::from(img.get_pixel(c as u32, r as u32).0[0] < cutoff)
    })
}

pub fn load_pixels(path: &Path, cutoff: u8) -> Result<Grid<u8>, Box<dyn Error>> {
    let img = image::open(path)?.to_luma8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(binarize(&img, cutoff)?)
}

pub fn map_color(value: f64, max: f64, cmap: ColorMap) -> Rgb<u8> {
    // Log scale so the DC bin does not wash out everything else
    let t = if max > 0.0 {
        (value.ln_1p() / max.ln_1p()).clamp(0.0, 1.0)
    } else {
        0.0
    };
    match cmap {
        ColorMap::Gray => {
            let g = (t * 255.0).round() as u8;
            Rgb([g, g, g])
        }
        ColorMap::Viridis => {
            let c = colorous::VIRIDIS.eval_continuous(t);
            Rgb([c.r, c.g, c.b])
        }
        ColorMap::Inferno => {
            let c = colorous::INFERNO.eval_continuous(t);
            Rgb([c.r, c.g, c.b])
        }
    }
}

/// Magnitude heatmap, one pixel per frequency bin, row `k` at `y = k`.
pub fn render_spectrum(
    spectrum: &Grid<Complex64>,
    cmap: ColorMap,
) -> Result<RgbImage, Box<dyn Error>> {
    let width = u32::try_from(spectrum.cols())?;
    let height = u32::try_from(spectrum.rows())?;
    let max = spectrum
        .as_slice()
        .iter()
        .map(|c| c.norm())
        .fold(0.0f64, f64::max);
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        map_color(spectrum[(y as usize, x as usize)].norm(), max, cmap)
    }))
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)?;
    Ok(())
}

/// The constant, delta and checkerboard 4x4 self-check matrices.
pub fn demo_grids() -> Result<Vec<(&'static str, Grid<i32>)>, GridError> {
    Ok(vec![
        ("constant", Grid::filled(4, 4, 1)?),
        ("delta", Grid::from_fn(4, 4, |r, c| i32::from(r == 0 && c == 0))?),
        (
            "checkerboard",
            Grid::from_fn(4, 4, |r, c| if (r + c) % 2 == 0 { 1 } else { -1 })?,
        ),
    ])
}

pub fn describe_component(c: &SpectralComponent<f64>) -> String {
    format!(
        "({}, {}) amplitude {:.4} phase {:.4} frequency ({:.4}, {:.4})",
        c.row, c.col, c.amplitude, c.phase, c.frequency.0, c.frequency.1
    )
}
