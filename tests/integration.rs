//! Integration tests for the convolver crate.
//!
//! These tests verify end-to-end workflows: load from the textual
//! format, validate, convolve, persist, and read the result back.

use convolver::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

#[test]
fn test_load_convolve_store_round_trip() {
    let image_file = write_fixture("3 3\n1.0 2.0 3.0\n4.0 5.0 6.0\n7.0 8.0 9.0\n");
    let kernel_file = write_fixture("1 1\n2.0\n");

    let image = read_matrix(image_file.path()).expect("image fixture loads");
    let kernel = read_matrix(kernel_file.path()).expect("kernel fixture loads");

    let out = conv2d_f32(&image, &kernel).expect("1x1 kernel fits a 3x3 image");
    assert_eq!(out.shape(), (3, 3));
    assert!((out.get(2, 2) - 18.0).abs() < 1e-5);

    let out_file = NamedTempFile::new().expect("temp");
    write_matrix(out_file.path(), &out).expect("output persists");
    let back = read_matrix(out_file.path()).expect("own output loads");

    assert_eq!(back.shape(), out.shape());
    for (a, b) in back.as_slice().iter().zip(out.as_slice()) {
        assert!((a - b).abs() <= 5.001e-4);
    }
}

#[test]
fn test_oversized_kernel_stops_before_convolving() {
    let image_file = write_fixture("2 2\n1.0 2.0\n3.0 4.0\n");
    let kernel_file = write_fixture("3 3\n1.0 1.0 1.0\n1.0 1.0 1.0\n1.0 1.0 1.0\n");

    let image = read_matrix(image_file.path()).expect("image fixture loads");
    let kernel = read_matrix(kernel_file.path()).expect("kernel fixture loads");

    let err = conv2d_f32(&image, &kernel).unwrap_err();
    assert!(matches!(err, ConvolverError::KernelTooLarge { .. }));
}

#[test]
fn test_malformed_file_is_a_load_failure() {
    let broken = write_fixture("2 2\n1.0 2.0 3.0\n");
    let err = read_matrix(broken.path()).unwrap_err();
    assert!(matches!(err, ConvolverError::Parse { .. }));
}

#[test]
fn test_missing_file_is_an_io_failure() {
    let err = read_matrix("/nonexistent/convolver-fixture.txt").unwrap_err();
    assert!(matches!(err, ConvolverError::Io(_)));
}

#[test]
fn test_seeded_generation_pipeline() {
    // The generated fixtures are deterministic, so the whole pipeline is.
    let image = uniform_matrix(16, 16, Some(1234));
    let kernel = uniform_matrix(3, 3, Some(5678));

    let first = conv2d_f32(&image, &kernel).expect("3x3 kernel fits a 16x16 image");
    let second = conv2d_f32(
        &uniform_matrix(16, 16, Some(1234)),
        &uniform_matrix(3, 3, Some(5678)),
    )
    .expect("3x3 kernel fits a 16x16 image");

    assert_eq!(first, second);
}

#[test]
fn test_persisted_fixture_convolves_to_3_decimal_stability() {
    // Write generated data, read it back, convolve both copies: the
    // re-read copy only lost precision past the 3rd decimal, so the
    // two outputs agree to roughly kernel-sum * 5e-4.
    let image = uniform_matrix(8, 8, Some(1234));
    let kernel = uniform_matrix(3, 3, Some(5678));

    let image_file = NamedTempFile::new().expect("temp");
    write_matrix(image_file.path(), &image).expect("image persists");
    let reread = read_matrix(image_file.path()).expect("image reloads");

    let exact = conv2d_f32(&image, &kernel).expect("3x3 kernel fits an 8x8 image");
    let lossy = conv2d_f32(&reread, &kernel).expect("3x3 kernel fits an 8x8 image");

    for (a, b) in exact.as_slice().iter().zip(lossy.as_slice()) {
        assert!((a - b).abs() < 0.01, "{a} vs {b}");
    }
}
