//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product kernel.

pub mod c_impl;
mod chunked;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(c_implementation_active)]
pub use c_impl::dot_product_c_original;
pub use c_impl::C_IMPL_AVAILABLE;
pub use chunked::{dot_product_chunked, dot_product_chunked_with, DEFAULT_CHUNK_SIZE};
pub use original::dot_product_original;
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> f64;

/// Name of the reference variant every other one is checked against.
pub const REFERENCE_VARIANT: &str = "original";

/// Get all available variants for the current CPU and build
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Single f64 accumulator in input order",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Four accumulators (manual loop unrolling)",
            function: dot_product_scalar_opt,
        },
        VariantInfo {
            name: "chunked",
            description: "Fixed-size chunks on scoped threads, ordered reduction",
            function: dot_product_chunked,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 f64 intrinsics",
        function: dot_product_x86_64_sse2,
    });

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-original",
        description: "C reference implementation over FFI",
        function: dot_product_c_original,
    });

    variants
}
