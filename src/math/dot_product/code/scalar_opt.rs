//! Optimized scalar implementation with loop unrolling.
//!
//! Four independent accumulators break the add dependency chain. The
//! summation order differs from `original`, so results agree only within
//! floating-point tolerance, but the order is fixed and therefore
//! deterministic.

/// Compute the dot product with 4x loop unrolling.
pub fn dot_product_scalar_opt(x: &[f64], w: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), w.len(), "Vectors must have the same length");

    let len = x.len().min(w.len());
    let chunks = len / 4;

    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;
    let mut sum2 = 0.0f64;
    let mut sum3 = 0.0f64;

    for i in 0..chunks {
        let idx = i * 4;
        sum0 += x[idx] * w[idx];
        sum1 += x[idx + 1] * w[idx + 1];
        sum2 += x[idx + 2] * w[idx + 2];
        sum3 += x[idx + 3] * w[idx + 3];
    }

    for i in (chunks * 4)..len {
        sum0 += x[i] * w[i];
    }

    (sum0 + sum1) + (sum2 + sum3)
}
