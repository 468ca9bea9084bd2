//! Entry point from the host: argument checks, conversion, dispatch.
//!
//! A call moves through `ParsingArgs → ConvertingX → ConvertingW →
//! CheckingLengths → Computing → Done`, and any stage before `Computing`
//! can end the call with an error. Converted buffers are owned locals, so
//! they are released on every exit path.

pub mod convert;

pub use convert::{to_numeric_vector, NumericVector};

use crate::config::BridgeConfig;
use crate::error::{Argument, BridgeError, BridgeResult};
use crate::host::HostValue;
use crate::math::dot_product::Kernel;
use crate::registry::KernelRegistry;
use log::{debug, trace};
use std::fmt;

/// Number of positional arguments the entry point takes.
pub const ARITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ParsingArgs,
    ConvertingX,
    ConvertingW,
    CheckingLengths,
    Computing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ParsingArgs => "parsing-args",
            Stage::ConvertingX => "converting-x",
            Stage::ConvertingW => "converting-w",
            Stage::CheckingLengths => "checking-lengths",
            Stage::Computing => "computing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Validates host arguments and runs the configured kernel on them.
///
/// Holds no per-call state; one `Bridge` can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bridge {
    kernel: Kernel,
}

impl Bridge {
    /// Build a bridge for the kernel named in `config`.
    pub fn new(config: &BridgeConfig) -> BridgeResult<Self> {
        let kernel = KernelRegistry::new().resolve(&config.kernel, config.chunk_size)?;
        debug!("bridge using kernel '{}'", kernel.name());
        Ok(Self { kernel })
    }

    pub fn with_kernel(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Host-facing call: exactly two positional arguments, `x` then `w`.
    pub fn call(&self, args: &[HostValue]) -> BridgeResult<f64> {
        trace!("stage {}", Stage::ParsingArgs);
        let [x, w] = args else {
            return Err(failed(
                Stage::ParsingArgs,
                BridgeError::Argument {
                    expected: ARITY,
                    got: args.len(),
                },
            ));
        };
        self.dot_product(x, w)
    }

    /// Dot product of two caller sequences of floats.
    pub fn dot_product(&self, x: &HostValue, w: &HostValue) -> BridgeResult<f64> {
        trace!("stage {}", Stage::ConvertingX);
        let x = to_numeric_vector(x, Argument::X).map_err(|e| failed(Stage::ConvertingX, e))?;

        trace!("stage {}", Stage::ConvertingW);
        let w = to_numeric_vector(w, Argument::W).map_err(|e| failed(Stage::ConvertingW, e))?;

        trace!("stage {}", Stage::CheckingLengths);
        if x.len() != w.len() {
            return Err(failed(
                Stage::CheckingLengths,
                BridgeError::LengthMismatch {
                    x: x.len(),
                    w: w.len(),
                },
            ));
        }

        trace!(
            "stage {} ({} elements, kernel '{}')",
            Stage::Computing,
            x.len(),
            self.kernel.name()
        );
        Ok(self.compute(&x, &w))
    }

    /// Run the kernel on already validated buffers of equal length.
    pub fn compute(&self, x: &NumericVector, w: &NumericVector) -> f64 {
        debug_assert_eq!(x.len(), w.len());
        let result = self.kernel.compute(x, w);
        trace!("stage {}", Stage::Done);
        result
    }
}

fn failed(stage: Stage, err: BridgeError) -> BridgeError {
    debug!("dot product failed at {}: {} [{}]", stage, err, err.host_class());
    err
}

/// [`Bridge::call`] with the reference kernel.
pub fn matmul(args: &[HostValue]) -> BridgeResult<f64> {
    Bridge::default().call(args)
}

/// [`Bridge::dot_product`] with the reference kernel.
pub fn dot_product(x: &HostValue, w: &HostValue) -> BridgeResult<f64> {
    Bridge::default().dot_product(x, w)
}
