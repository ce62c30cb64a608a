use clap::{Parser, Subcommand, ValueEnum};
use pixfft::ndfft::fft2d;
use pixfft::pipeline::{analyze, AnalysisOptions, ComponentSource};
use pixfft::{Complex64, Grid, DEFAULT_THRESHOLD};
use pixfft_cli::{
    demo_grids, describe_component, env_foreground_luma, env_threshold, load_pixels,
    render_spectrum, save_png, ColorMap, DEFAULT_FOREGROUND_LUMA,
};
use std::error::Error;
use std::path::PathBuf;

/// Fourier analysis of hand-drawn binary images.
#[derive(Parser)]
#[command(name = "pixfft")]
struct Cli {
    /// Print debug logs from the transforms
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy)]
enum Source {
    Reconstruction,
    Spectrum,
}

#[derive(Subcommand)]
enum Command {
    /// Thin, transform and list the dominant frequencies of an image
    Analyze {
        /// Path to the input image
        input: PathBuf,

        /// Amplitude a component must exceed
        #[arg(long)]
        threshold: Option<f64>,

        /// Skip Zhang-Suen thinning
        #[arg(long)]
        no_thin: bool,

        /// Only print the strongest N components
        #[arg(long)]
        limit: Option<usize>,

        /// Field the components are read from
        #[arg(long, value_enum, default_value_t = Source::Reconstruction)]
        source: Source,

        /// Luma below which a pixel counts as ink
        #[arg(long)]
        luma: Option<u8>,
    },
    /// Render the magnitude spectrum of an image as a PNG heatmap
    Spectrum {
        /// Path to the input image
        input: PathBuf,

        /// Path of the PNG to write
        output: PathBuf,

        /// Color map for the output PNG
        #[arg(long, value_enum, default_value_t = ColorMap::Inferno)]
        colormap: ColorMap,

        /// Luma below which a pixel counts as ink
        #[arg(long)]
        luma: Option<u8>,
    },
    /// Print the spectra of the constant, delta and checkerboard matrices
    Demo,
}

fn cutoff(luma: Option<u8>) -> u8 {
    luma.or_else(env_foreground_luma)
        .unwrap_or(DEFAULT_FOREGROUND_LUMA)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Analyze {
            input,
            threshold,
            no_thin,
            limit,
            source,
            luma,
        } => {
            let pixels = load_pixels(&input, cutoff(luma))?;
            let options = AnalysisOptions {
                threshold: threshold.or_else(env_threshold).unwrap_or(DEFAULT_THRESHOLD),
                thin: !no_thin,
                source: match source {
                    Source::Reconstruction => ComponentSource::Reconstruction,
                    Source::Spectrum => ComponentSource::Spectrum,
                },
                limit,
            };
            let analysis = analyze(&pixels, &options)?;
            println!("image {}x{}", pixels.rows(), pixels.cols());
            if let Some(report) = analysis.thinning {
                println!(
                    "thinning removed {} pixels in {} iterations",
                    report.removed, report.iterations
                );
            }
            let (rows, cols) = analysis.spectrum.dims();
            println!("spectrum {}x{}", rows, cols);
            println!(
                "{} components above {}",
                analysis.components.len(),
                options.threshold
            );
            for c in &analysis.components {
                println!("{}", describe_component(c));
            }
        }
        Command::Spectrum {
            input,
            output,
            colormap,
            luma,
        } => {
            let pixels = load_pixels(&input, cutoff(luma))?;
            let spectrum: Grid<Complex64> = fft2d(&pixels)?;
            let img = render_spectrum(&spectrum, colormap)?;
            save_png(&img, &output)?;
            println!(
                "wrote {}x{} spectrum to {}",
                img.width(),
                img.height(),
                output.display()
            );
        }
        Command::Demo => {
            for (name, grid) in demo_grids()? {
                let spectrum: Grid<Complex64> = fft2d(&grid)?;
                println!("{}:\n{:.2}", name, spectrum);
            }
        }
    }
    Ok(())
}
