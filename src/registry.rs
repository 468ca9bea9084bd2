//! Kernel registry for looking up dot product variants by name.
//!
//! The bridge resolves its configured kernel through here, and `verify`
//! checks every variant against the reference on seeded random input.

use crate::error::{BridgeError, BridgeResult};
use crate::math::dot_product::bench::random_inputs;
use crate::math::dot_product::{
    available_variants, DotProductFn, Kernel, REFERENCE_VARIANT,
};
use crate::utils::VariantInfo;

/// Relative tolerance allowed between a variant and the reference.
/// Summation order differs between variants, which affects the lowest bits.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// All kernel variants available in this build
pub struct KernelRegistry {
    variants: Vec<VariantInfo<DotProductFn>>,
}

impl KernelRegistry {
    /// Registry of every variant the current build and CPU support
    pub fn new() -> Self {
        Self {
            variants: available_variants(),
        }
    }

    /// Get all registered variants
    pub fn all(&self) -> &[VariantInfo<DotProductFn>] {
        &self.variants
    }

    /// Find a variant by name
    pub fn find(&self, name: &str) -> Option<&VariantInfo<DotProductFn>> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// List variant names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name).collect()
    }

    /// Resolve a variant name into a runnable kernel.
    ///
    /// `chunk_size` only matters for the `chunked` variant.
    pub fn resolve(&self, name: &str, chunk_size: usize) -> BridgeResult<Kernel> {
        let variant = self.find(name).ok_or_else(|| BridgeError::UnknownKernel {
            name: name.to_string(),
            available: self.list_names().join(", "),
        })?;

        Ok(match variant.name {
            "chunked" => Kernel::Chunked { chunk_size },
            name => Kernel::Plain {
                name,
                function: variant.function,
            },
        })
    }

    /// Verify every variant against the reference on `size` random elements.
    pub fn verify(&self, size: usize, seed: u64) -> Result<(), String> {
        let reference = self
            .find(REFERENCE_VARIANT)
            .ok_or("No 'original' variant found for reference")?;

        let (x, w) = random_inputs(size, seed);
        let expected = (reference.function)(&x, &w);

        for variant in &self.variants {
            if variant.name == REFERENCE_VARIANT {
                continue;
            }

            let result = (variant.function)(&x, &w);
            let diff = (result - expected).abs();

            if diff > VERIFY_TOLERANCE * expected.abs().max(1.0) {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        Ok(())
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_always_registered() {
        let registry = KernelRegistry::new();
        assert!(registry.find(REFERENCE_VARIANT).is_some());
        assert_eq!(registry.list_names()[0], REFERENCE_VARIANT);
    }

    #[test]
    fn test_resolve_unknown_kernel() {
        let registry = KernelRegistry::new();
        match registry.resolve("x86_64-avx512", 4096) {
            Err(BridgeError::UnknownKernel { name, available }) => {
                assert_eq!(name, "x86_64-avx512");
                assert!(available.contains(REFERENCE_VARIANT));
            }
            other => panic!("expected UnknownKernel, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_chunked_carries_chunk_size() {
        let registry = KernelRegistry::new();
        match registry.resolve("chunked", 256) {
            Ok(Kernel::Chunked { chunk_size }) => assert_eq!(chunk_size, 256),
            other => panic!("expected chunked kernel, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_all_variants() {
        let registry = KernelRegistry::new();
        // Non-aligned size exercises every variant's tail handling.
        for size in [0, 1, 1023, 10_007] {
            if let Err(e) = registry.verify(size, 0xcafe) {
                panic!("size {}: {}", size, e);
            }
        }
    }
}
