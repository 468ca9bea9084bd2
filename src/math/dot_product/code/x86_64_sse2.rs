//! x86_64 SSE2 SIMD implementation.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.
//! Two f64 lanes per iteration.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Compute the dot product using SSE2 `_pd` intrinsics.
///
/// Lane 0 accumulates even indices and lane 1 odd indices; the lanes are
/// added once at the end, followed by the odd tail element if any.
#[cfg(target_arch = "x86_64")]
pub fn dot_product_x86_64_sse2(x: &[f64], w: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), w.len(), "Vectors must have the same length");

    let len = x.len().min(w.len());
    let chunks = len / 2;

    // SAFETY: SSE2 is always available on x86_64, and every load reads
    // indices `idx` and `idx + 1` with `idx + 1 < chunks * 2 <= len`.
    let mut result = unsafe {
        let mut sum_vec = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 2;
            let x_vec = _mm_loadu_pd(x.as_ptr().add(idx));
            let w_vec = _mm_loadu_pd(w.as_ptr().add(idx));
            sum_vec = _mm_add_pd(sum_vec, _mm_mul_pd(x_vec, w_vec));
        }

        let hi = _mm_unpackhi_pd(sum_vec, sum_vec);
        _mm_cvtsd_f64(_mm_add_sd(sum_vec, hi))
    };

    if len % 2 == 1 {
        result += x[len - 1] * w[len - 1];
    }

    result
}
