//! Box blur demo: convolve a seeded random image with a 3x3 mean kernel.
//!
//! Run with: cargo run --example box_blur

use convolver::prelude::*;
use convolver::primitives::Matrix;

fn main() {
    let image = uniform_matrix(8, 8, Some(1234));

    let kernel = Matrix::from_vec(3, 3, vec![1.0 / 9.0; 9]).expect("3*3=9 elements");

    let blurred = conv2d_f32(&image, &kernel).expect("3x3 kernel fits an 8x8 image");

    println!("input:");
    print_matrix(&image);
    println!("\nblurred (zero-padded borders dim toward the edges):");
    print_matrix(&blurred);
}

fn print_matrix(m: &Matrix<f32>) {
    let (rows, cols) = m.shape();
    for i in 0..rows {
        let row: Vec<String> = (0..cols).map(|j| format!("{:.3}", m.get(i, j))).collect();
        println!("{}", row.join(" "));
    }
}
