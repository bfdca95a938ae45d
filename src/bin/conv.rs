//! conv - timed 2-D convolution driver
//!
//! Usage:
//!   conv -f f.txt -g g.txt              # read inputs, print output to stdout
//!   conv -f f.txt -g g.txt -o out.txt   # write output to out.txt
//!   conv -H 1000 -W 1000 --kh 3 --kw 3  # generate seeded random inputs
//!   conv -H 100 -W 200 --kh 4 --kw 4 -f f.txt -g g.txt -o out.txt
//!
//! When all four dimensions are given the inputs are generated from
//! fixed seeds and, if `-f`/`-g` paths are also present, persisted to
//! them. Kernel wall time is reported on stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use thiserror::Error;

use convolver::conv;
use convolver::error::ConvolverError;
use convolver::io::{read_matrix, write_matrix, write_matrix_to};
use convolver::primitives::Matrix;
use convolver::synthetic::uniform_matrix;

/// Seeds matching the original assignment data, so generated fixtures
/// stay comparable across runs and implementations.
const IMAGE_SEED: u64 = 1234;
const KERNEL_SEED: u64 = 5678;

/// conv - naive 2-D convolution with zero padding
///
/// Convolves an image matrix against a kernel matrix and reports the
/// kernel wall time.
#[derive(Parser)]
#[command(name = "conv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image file to read, or to write when generating
    #[arg(short = 'f', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Kernel file to read, or to write when generating
    #[arg(short = 'g', long = "kernel", value_name = "FILE")]
    kernel: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Image height (with -W, --kh and --kw enables generation)
    #[arg(short = 'H', long = "height", value_name = "ROWS")]
    height: Option<usize>,

    /// Image width
    #[arg(short = 'W', long = "width", value_name = "COLS")]
    width: Option<usize>,

    /// Kernel height
    #[arg(long = "kh", value_name = "ROWS")]
    kernel_height: Option<usize>,

    /// Kernel width
    #[arg(long = "kw", value_name = "COLS")]
    kernel_width: Option<usize>,

    /// Partition output rows across threads
    #[cfg(feature = "parallel")]
    #[arg(long)]
    parallel: bool,

    /// Suppress the timing report
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Error, Debug)]
enum CliError {
    /// Input could not be loaded
    #[error("Failed to read {role} file: {source}")]
    Load {
        role: &'static str,
        source: ConvolverError,
    },

    /// Result or generated input could not be persisted
    #[error("Failed to write {role} file: {source}")]
    Store {
        role: &'static str,
        source: ConvolverError,
    },

    /// Shape validation or the kernel itself failed
    #[error("{0}")]
    Convolve(ConvolverError),

    /// Neither an image file nor full image dimensions were given
    #[error("Either provide --input or both --height and --width")]
    MissingImage,

    /// Neither a kernel file nor full kernel dimensions were given
    #[error("Either provide --kernel or both --kh and --kw")]
    MissingKernel,
}

impl CliError {
    /// Get exit code for this error
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Load { .. } => ExitCode::from(3),
            Self::Store { .. } => ExitCode::from(7),
            Self::Convolve(_) => ExitCode::from(5),
            Self::MissingImage | Self::MissingKernel => ExitCode::from(2),
        }
    }
}

/// Loads one operand from disk, or generates it when all dimensions
/// were supplied on the command line.
///
/// Mirrors the original driver: with full dimensions present, files
/// are generation targets rather than sources.
fn obtain(
    path: Option<&Path>,
    dims: Option<(usize, usize)>,
    seed: u64,
    role: &'static str,
    generate: bool,
    missing: CliError,
) -> Result<Matrix<f32>, CliError> {
    if let (Some(p), false) = (path, generate) {
        return read_matrix(p).map_err(|source| CliError::Load { role, source });
    }
    let Some((rows, cols)) = dims else {
        return Err(missing);
    };
    let m = uniform_matrix(rows, cols, Some(seed));
    if let Some(p) = path {
        write_matrix(p, &m).map_err(|source| CliError::Store { role, source })?;
    }
    Ok(m)
}

#[cfg(feature = "parallel")]
fn run_kernel(
    cli: &Cli,
    f: &Matrix<f64>,
    g: &Matrix<f64>,
) -> Result<Matrix<f64>, ConvolverError> {
    if cli.parallel {
        conv::conv2d_parallel(f, g)
    } else {
        conv::conv2d(f, g)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_kernel(
    _cli: &Cli,
    f: &Matrix<f64>,
    g: &Matrix<f64>,
) -> Result<Matrix<f64>, ConvolverError> {
    conv::conv2d(f, g)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let image_dims = cli.height.zip(cli.width);
    let kernel_dims = cli.kernel_height.zip(cli.kernel_width);
    let generate = image_dims.is_some() && kernel_dims.is_some();

    let image = obtain(
        cli.input.as_deref(),
        image_dims,
        IMAGE_SEED,
        "image",
        generate,
        CliError::MissingImage,
    )?;
    let kernel = obtain(
        cli.kernel.as_deref(),
        kernel_dims,
        KERNEL_SEED,
        "kernel",
        generate,
        CliError::MissingKernel,
    )?;

    let f = image.widen();
    let g = kernel.widen();

    let start = Instant::now();
    let out = run_kernel(cli, &f, &g).map_err(CliError::Convolve)?;
    let elapsed = start.elapsed();

    let out = out.narrow();
    match &cli.output {
        Some(path) => write_matrix(path, &out).map_err(|source| CliError::Store {
            role: "output",
            source,
        })?,
        None => {
            let stdout = std::io::stdout();
            write_matrix_to(stdout.lock(), &out).map_err(|source| CliError::Store {
                role: "output",
                source,
            })?;
        }
    }

    if !cli.quiet {
        eprintln!("Time: {:.6} s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
