//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use convolver::prelude::*;
//! ```

pub use crate::conv::{conv2d, conv2d_f32};
#[cfg(feature = "parallel")]
pub use crate::conv::conv2d_parallel;
pub use crate::error::ConvolverError;
pub use crate::io::{read_matrix, write_matrix};
pub use crate::primitives::Matrix;
pub use crate::synthetic::uniform_matrix;
