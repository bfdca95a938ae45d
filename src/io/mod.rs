//! Textual matrix file format.
//!
//! ```text
//! <H> <W>
//! <row 0, W values space separated, no trailing space>
//! ...
//! <row H-1>
//! ```
//!
//! Values are written with exactly 3 decimal places. Reading is
//! whitespace-tolerant: dimensions and values are scanned as a flat
//! token stream, so line breaks inside a row are accepted. Token
//! count is strict in both directions: too few values and trailing
//! garbage are both load failures.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::ConvolverError;
use crate::primitives::Matrix;

fn parse_err(message: impl Into<String>) -> ConvolverError {
    ConvolverError::Parse {
        message: message.into(),
    }
}

fn parse_dim(token: Option<&str>, name: &str) -> Result<usize, ConvolverError> {
    let token = token.ok_or_else(|| parse_err(format!("missing {name} in header")))?;
    let value: i64 = token
        .parse()
        .map_err(|_| parse_err(format!("invalid {name} {token:?} in header")))?;
    if value < 1 {
        return Err(parse_err(format!("{name} must be at least 1, got {value}")));
    }
    Ok(value as usize)
}

/// Reads a matrix from any reader in the textual format.
///
/// # Errors
///
/// Returns [`ConvolverError::Parse`] on malformed headers, non-numeric
/// values, or wrong token counts, and [`ConvolverError::Io`] when the
/// underlying read fails. A failed load never yields a partial matrix.
pub fn read_matrix_from(mut reader: impl Read) -> Result<Matrix<f32>, ConvolverError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let rows = parse_dim(tokens.next(), "row count")?;
    let cols = parse_dim(tokens.next(), "column count")?;

    let expected = rows.checked_mul(cols).ok_or_else(|| {
        parse_err(format!("matrix size {rows}x{cols} overflows the element count"))
    })?;
    let mut data = Vec::with_capacity(expected);
    for token in tokens.by_ref().take(expected) {
        let value: f32 = token
            .parse()
            .map_err(|_| parse_err(format!("invalid value {token:?}")))?;
        data.push(value);
    }
    if data.len() != expected {
        return Err(parse_err(format!(
            "expected {expected} values for a {rows}x{cols} matrix, found {}",
            data.len()
        )));
    }
    if tokens.next().is_some() {
        return Err(parse_err(format!(
            "trailing data after {expected} values"
        )));
    }

    Ok(Matrix::from_vec(rows, cols, data)?)
}

/// Reads a matrix from a file in the textual format.
///
/// # Errors
///
/// Same conditions as [`read_matrix_from`].
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix<f32>, ConvolverError> {
    let file = File::open(path)?;
    read_matrix_from(BufReader::new(file))
}

/// Writes a matrix to any writer in the textual format.
///
/// Values are printed with exactly 3 decimal places, space separated,
/// no trailing space on a line.
///
/// # Errors
///
/// Returns [`ConvolverError::Io`] when the underlying write fails.
pub fn write_matrix_to(mut writer: impl Write, m: &Matrix<f32>) -> Result<(), ConvolverError> {
    let (rows, cols) = m.shape();
    writeln!(writer, "{rows} {cols}")?;
    for i in 0..rows {
        for j in 0..cols {
            if j > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{:.3}", m.get(i, j))?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a matrix to a file in the textual format.
///
/// # Errors
///
/// Same conditions as [`write_matrix_to`].
pub fn write_matrix(path: impl AsRef<Path>, m: &Matrix<f32>) -> Result<(), ConvolverError> {
    let file = File::create(path)?;
    write_matrix_to(BufWriter::new(file), m)
}
