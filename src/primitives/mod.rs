//! Core compute primitive (Matrix).
//!
//! One owned, contiguous, row-major buffer per matrix; no sharing or
//! aliasing between matrices. `f32` is the storage precision, `f64`
//! the compute precision, with explicit conversions between the two.

mod matrix;

pub use matrix::Matrix;
