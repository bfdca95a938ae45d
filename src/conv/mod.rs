//! Naive 2-D convolution (correlation) with zero padding.
//!
//! This is the direct O(H * W * kH * kW) weighted sum, kept naive on
//! purpose for performance-comparison work: no FFT, no separable-kernel
//! shortcut. The kernel is not flipped, so in signal-processing terms
//! the operation is a correlation; the conventional name sticks.
//!
//! # Center offset
//!
//! The kernel tap that aligns with the current output cell is
//! `centre = (k - 1) / 2` per dimension (floor division). Odd kernels
//! are centered exactly; even kernels are biased toward the lower/left
//! index. That asymmetry is part of the contract and is pinned by tests.
//!
//! # Edge policy
//!
//! Any tap whose source coordinate falls outside the image contributes
//! nothing (implicit zero padding). No reflection, no clamping, no
//! wrap-around.

use crate::error::ConvolverError;
use crate::primitives::Matrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rejects shapes the kernel cannot run on.
///
/// Empty matrices and kernels exceeding the image in either dimension
/// are configuration errors, caught before any computation starts.
fn validate(f: &Matrix<f64>, g: &Matrix<f64>) -> Result<(), ConvolverError> {
    let (h, w) = f.shape();
    let (kh, kw) = g.shape();
    if h == 0 || w == 0 {
        return Err(ConvolverError::EmptyMatrix { rows: h, cols: w });
    }
    if kh == 0 || kw == 0 {
        return Err(ConvolverError::EmptyMatrix { rows: kh, cols: kw });
    }
    if kh > h || kw > w {
        return Err(ConvolverError::KernelTooLarge {
            image: (h, w),
            kernel: (kh, kw),
        });
    }
    Ok(())
}

/// Accumulates all kernel taps for one output cell.
///
/// Out-of-bounds source coordinates are skipped, which is equivalent to
/// multiplying an implicit zero.
fn cell(f: &Matrix<f64>, g: &Matrix<f64>, i: usize, j: usize) -> f64 {
    let (h, w) = f.shape();
    let (kh, kw) = g.shape();
    let centre_r = ((kh - 1) / 2) as isize;
    let centre_c = ((kw - 1) / 2) as isize;

    let mut sum = 0.0;
    for ki in 0..kh {
        let src_i = i as isize + ki as isize - centre_r;
        if src_i < 0 || src_i >= h as isize {
            continue;
        }
        for kj in 0..kw {
            let src_j = j as isize + kj as isize - centre_c;
            if src_j < 0 || src_j >= w as isize {
                continue;
            }
            sum += f.get(src_i as usize, src_j as usize) * g.get(ki, kj);
        }
    }
    sum
}

/// Convolves image `f` with kernel `g` at compute precision.
///
/// The output has the same shape as `f` and is freshly allocated; the
/// inputs are only read. Pure function of its two arguments.
///
/// # Errors
///
/// Returns [`ConvolverError::KernelTooLarge`] when the kernel exceeds
/// the image in either dimension and [`ConvolverError::EmptyMatrix`]
/// when either matrix has no elements.
///
/// # Examples
///
/// ```
/// use convolver::conv::conv2d;
/// use convolver::primitives::Matrix;
///
/// let f = Matrix::<f32>::ones(4, 4).widen();
/// let g = Matrix::from_vec(1, 1, vec![3.0_f64]).unwrap();
/// let out = conv2d(&f, &g).unwrap();
/// assert!((out.get(2, 2) - 3.0).abs() < 1e-12);
/// ```
pub fn conv2d(f: &Matrix<f64>, g: &Matrix<f64>) -> Result<Matrix<f64>, ConvolverError> {
    validate(f, g)?;
    let (h, w) = f.shape();

    let mut out = Matrix::<f64>::zeros(h, w);
    for i in 0..h {
        for j in 0..w {
            out.set(i, j, cell(f, g, i, j));
        }
    }
    Ok(out)
}

/// Convolves at storage precision, accumulating in `f64`.
///
/// Widens both operands to compute precision, runs [`conv2d`], and
/// narrows the result back. The narrowing happens once, after all
/// accumulation is done.
///
/// # Errors
///
/// Same conditions as [`conv2d`].
pub fn conv2d_f32(f: &Matrix<f32>, g: &Matrix<f32>) -> Result<Matrix<f32>, ConvolverError> {
    Ok(conv2d(&f.widen(), &g.widen())?.narrow())
}

/// Parallel [`conv2d`]: output rows partitioned across rayon workers.
///
/// Each worker writes a disjoint row range; `f` and `g` are only read.
/// Produces bit-identical results to the sequential kernel since each
/// output cell is still a single left-to-right accumulation.
///
/// # Errors
///
/// Same conditions as [`conv2d`].
#[cfg(feature = "parallel")]
pub fn conv2d_parallel(f: &Matrix<f64>, g: &Matrix<f64>) -> Result<Matrix<f64>, ConvolverError> {
    validate(f, g)?;
    let (h, w) = f.shape();

    let mut out = Matrix::<f64>::zeros(h, w);
    out.as_mut_slice()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, slot) in row.iter_mut().enumerate() {
                *slot = cell(f, g, i, j);
            }
        });
    Ok(out)
}

#[cfg(test)]
#[path = "conv_tests.rs"]
mod tests;
