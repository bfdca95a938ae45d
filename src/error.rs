//! Error types for Convolver operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Convolver operations.
///
/// Covers configuration errors caught before the kernel runs (kernel
/// larger than the image, empty matrices) and load failures from the
/// textual matrix format.
///
/// # Examples
///
/// ```
/// use convolver::error::ConvolverError;
///
/// let err = ConvolverError::KernelTooLarge {
///     image: (2, 2),
///     kernel: (3, 3),
/// };
/// assert!(err.to_string().contains("larger than image"));
/// ```
#[derive(Debug)]
pub enum ConvolverError {
    /// Kernel exceeds the image in at least one dimension.
    KernelTooLarge {
        /// Image shape (rows, cols)
        image: (usize, usize),
        /// Kernel shape (rows, cols)
        kernel: (usize, usize),
    },

    /// Matrix with zero rows or zero columns where data is required.
    EmptyMatrix {
        /// Rows found
        rows: usize,
        /// Columns found
        cols: usize,
    },

    /// Malformed matrix file (wrong token counts, non-numeric values).
    Parse {
        /// What went wrong while scanning the file
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ConvolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolverError::KernelTooLarge { image, kernel } => {
                write!(
                    f,
                    "Kernel must not be larger than image: image {}x{}, kernel {}x{}",
                    image.0, image.1, kernel.0, kernel.1
                )
            }
            ConvolverError::EmptyMatrix { rows, cols } => {
                write!(f, "Matrix must have at least one element, got {rows}x{cols}")
            }
            ConvolverError::Parse { message } => {
                write!(f, "Malformed matrix file: {message}")
            }
            ConvolverError::Io(e) => write!(f, "I/O error: {e}"),
            ConvolverError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConvolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvolverError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvolverError {
    fn from(err: std::io::Error) -> Self {
        ConvolverError::Io(err)
    }
}

impl From<&str> for ConvolverError {
    fn from(msg: &str) -> Self {
        ConvolverError::Other(msg.to_string())
    }
}
