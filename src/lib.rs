//! # llama-dot
//!
//! Dot product of two caller-supplied sequences of floats.
//!
//! Caller values arrive as untyped [`host::HostValue`]s. The bridge checks
//! that each one is a list of floats, copies it into an owned f64 buffer,
//! checks the lengths match, and runs a dot product kernel over the two
//! buffers:
//!
//! ```
//! use llama_dot::prelude::*;
//!
//! let x = HostValue::from(vec![1.0, 2.0, 3.0]);
//! let w = HostValue::from(vec![4.0, 5.0, 6.0]);
//! assert_eq!(dot_product(&x, &w).unwrap(), 32.0);
//!
//! let short = HostValue::from(vec![1.0]);
//! assert!(matches!(
//!     dot_product(&x, &short),
//!     Err(BridgeError::LengthMismatch { x: 3, w: 1 })
//! ));
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod math;
pub mod registry;
pub mod utils;

/// Re-export tui from utils for the CLI
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::bridge::{dot_product, matmul, Bridge, NumericVector};
    pub use crate::config::BridgeConfig;
    pub use crate::error::{Argument, BridgeError, BridgeResult, HostErrorClass};
    pub use crate::host::HostValue;
    pub use crate::math::dot_product::Kernel;
    pub use crate::registry::KernelRegistry;
}

#[cfg(test)]
mod tests {
    use crate::registry::KernelRegistry;

    #[test]
    fn test_all_kernel_variants_verify() {
        let registry = KernelRegistry::new();

        println!("Verifying {} kernel variants...", registry.all().len());

        if let Err(e) = registry.verify(4099, 0x1234) {
            panic!("  ❌ kernel verification failed: {}", e);
        }
    }
}
