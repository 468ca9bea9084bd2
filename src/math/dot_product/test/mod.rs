//! Tests for the dot product kernel variants.

use super::code::*;
use super::Kernel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RELATIVE_TOLERANCE: f64 = 1e-9;

fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn assert_close(got: f64, expected: f64, msg: &str) {
    let scale = expected.abs().max(1.0);
    let diff = (got - expected).abs();
    assert!(
        diff <= RELATIVE_TOLERANCE * scale,
        "{}: expected {}, got {}, diff = {}",
        msg,
        expected,
        got,
        diff
    );
}

#[test]
fn test_original_basic() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let w = [5.0, 6.0, 7.0, 8.0];
    // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
    assert_eq!(dot_product_original(&x, &w), 70.0);
}

#[test]
fn test_original_empty() {
    let x: [f64; 0] = [];
    let w: [f64; 0] = [];
    assert_eq!(dot_product_original(&x, &w).to_bits(), 0.0f64.to_bits());
}

#[test]
fn test_original_single() {
    assert_eq!(dot_product_original(&[3.0], &[4.0]), 12.0);
}

#[test]
fn test_original_keeps_f64_precision() {
    // 1e8 + 1 is exact in f64 but rounds away in f32.
    let x = [1e8, 1.0];
    let w = [1.0, 1.0];
    assert_eq!(dot_product_original(&x, &w), 100_000_001.0);
}

#[test]
fn test_every_variant_returns_zero_for_empty_input() {
    for variant in available_variants() {
        let result = (variant.function)(&[], &[]);
        assert_eq!(result, 0.0, "variant {}", variant.name);
    }
}

#[test]
fn test_every_variant_handles_odd_tails() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [1, 2, 3, 5, 7, 9, 4097] {
        let x = random_vector(&mut rng, len);
        let w = random_vector(&mut rng, len);
        let expected = dot_product_original(&x, &w);
        for variant in available_variants() {
            let got = (variant.function)(&x, &w);
            assert_close(got, expected, &format!("{} at len {}", variant.name, len));
        }
    }
}

#[test]
fn test_every_variant_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let x = random_vector(&mut rng, 20_000);
    let w = random_vector(&mut rng, 20_000);

    for variant in available_variants() {
        let first = (variant.function)(&x, &w);
        for _ in 0..5 {
            let again = (variant.function)(&x, &w);
            assert_eq!(
                first.to_bits(),
                again.to_bits(),
                "Variant {} should be deterministic",
                variant.name
            );
        }
    }
}

#[test]
fn test_chunked_kernel_honors_chunk_size() {
    let mut rng = StdRng::seed_from_u64(42);
    let x = random_vector(&mut rng, 1000);
    let w = random_vector(&mut rng, 1000);

    let kernel = Kernel::Chunked { chunk_size: 64 };
    assert_eq!(kernel.name(), "chunked");
    assert_eq!(
        kernel.compute(&x, &w).to_bits(),
        dot_product_chunked_with(&x, &w, 64).to_bits()
    );
}

#[test]
fn test_default_kernel_is_reference() {
    let kernel = Kernel::default();
    assert_eq!(kernel.name(), REFERENCE_VARIANT);
    assert_eq!(kernel.compute(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
}
