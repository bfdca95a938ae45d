//! Convolver: naive 2-D convolution over dense matrices.
//!
//! The kernel is the direct weighted sum (correlation, no kernel flip)
//! with implicit zero padding at the image boundary and a floor-division
//! center offset, so odd kernels are centered exactly and even kernels
//! are biased toward the lower/left index. Accumulation always happens
//! in `f64`, even when matrices are stored as `f32`.
//!
//! # Quick Start
//!
//! ```
//! use convolver::prelude::*;
//!
//! let image = Matrix::from_vec(3, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 5.0, 6.0,
//!     7.0, 8.0, 9.0,
//! ]).unwrap();
//! let kernel = Matrix::from_vec(1, 1, vec![2.0]).unwrap();
//!
//! let out = conv2d_f32(&image, &kernel).unwrap();
//! assert_eq!(out.shape(), (3, 3));
//! assert!((out.get(1, 1) - 10.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the row-major [`primitives::Matrix`] type with
//!   explicit storage (`f32`) and compute (`f64`) precisions
//! - [`conv`]: the convolution kernel itself
//! - [`io`]: the textual matrix file format
//! - [`synthetic`]: seeded uniform matrix generation
//! - [`error`]: error types for all failure paths

pub mod conv;
pub mod error;
pub mod io;
pub mod prelude;
pub mod primitives;
pub mod synthetic;
