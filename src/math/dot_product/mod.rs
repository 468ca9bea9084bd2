//! # Dot Product Kernel
//!
//! The dot product computes the sum of products of corresponding elements
//! in two vectors:
//!
//! `dot(x, w) = Σ(x[i] * w[i])`
//!
//! Every variant accumulates in f64, returns exactly `0.0` for empty input
//! and visits elements in a fixed order, so repeated calls on the same
//! input are bit-identical.
//!
//! ## Variants
//!
//! - **original**: single accumulator in input order (the default)
//! - **scalar_opt**: loop unrolling with four accumulators
//! - **chunked**: fixed-size chunks on scoped threads, reduced in order
//! - **x86_64-sse2**: two f64 lanes per iteration
//! - **c-original**: C kernel over FFI, when a C compiler was available

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

/// A resolved kernel the bridge dispatches to.
#[derive(Clone, Copy, Debug)]
pub enum Kernel {
    /// Any variant with the plain `(x, w) -> f64` signature.
    Plain {
        name: &'static str,
        function: DotProductFn,
    },
    /// The chunked variant with a caller-chosen chunk size.
    Chunked { chunk_size: usize },
}

impl Kernel {
    /// Variant name as listed by [`available_variants`].
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Plain { name, .. } => name,
            Kernel::Chunked { .. } => "chunked",
        }
    }

    /// Run the kernel. Both slices must have the same length.
    #[inline]
    pub fn compute(&self, x: &[f64], w: &[f64]) -> f64 {
        match *self {
            Kernel::Plain { function, .. } => function(x, w),
            Kernel::Chunked { chunk_size } => dot_product_chunked_with(x, w, chunk_size),
        }
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::Plain {
            name: REFERENCE_VARIANT,
            function: dot_product_original,
        }
    }
}
