//! Reference implementation of the dot product kernel.
//!
//! Single f64 accumulator, elements visited in input order. Every other
//! variant is verified against this one, and the bridge dispatches here
//! unless configured otherwise.

/// Compute the dot product of two vectors.
///
/// Callers guarantee equal lengths; this is checked only in debug builds.
///
/// # Example
/// ```
/// use llama_dot::math::dot_product::dot_product_original;
///
/// let x = [1.0, 2.0, 3.0];
/// let w = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_original(&x, &w), 32.0);
/// ```
pub fn dot_product_original(x: &[f64], w: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), w.len(), "Vectors must have the same length");

    let mut acc = 0.0f64;
    for (a, b) in x.iter().zip(w.iter()) {
        acc += a * b;
    }
    acc
}
