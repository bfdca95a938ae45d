//! Seeded synthetic matrix generation.
//!
//! Inputs for timing runs are synthesized instead of loaded: uniform
//! values in [0, 1), reproducible from a fixed seed so repeated runs
//! convolve identical data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitives::Matrix;

/// Generates a matrix with values uniform in [0, 1).
///
/// # Arguments
///
/// * `rows` - Number of rows
/// * `cols` - Number of columns
/// * `seed` - Optional random seed for reproducibility
///
/// # Example
///
/// ```
/// use convolver::synthetic::uniform_matrix;
///
/// let a = uniform_matrix(4, 4, Some(1234));
/// let b = uniform_matrix(4, 4, Some(1234));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn uniform_matrix(rows: usize, cols: usize, seed: Option<u64>) -> Matrix<f32> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut m = Matrix::<f32>::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, rng.gen::<f32>());
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_unit_interval() {
        let m = uniform_matrix(8, 8, Some(42));
        assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_same_seed_reproduces() {
        let a = uniform_matrix(5, 7, Some(1234));
        let b = uniform_matrix(5, 7, Some(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = uniform_matrix(5, 7, Some(1234));
        let b = uniform_matrix(5, 7, Some(5678));
        assert_ne!(a, b);
    }

    #[test]
    fn test_shape() {
        let m = uniform_matrix(3, 9, Some(1));
        assert_eq!(m.shape(), (3, 9));
    }
}
