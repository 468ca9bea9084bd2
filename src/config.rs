//! Bridge configuration: which kernel variant to dispatch to.

use crate::error::{BridgeError, BridgeResult};
use crate::math::dot_product::{DEFAULT_CHUNK_SIZE, REFERENCE_VARIANT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming the kernel variant.
pub const KERNEL_ENV: &str = "LLAMA_DOT_KERNEL";
/// Environment variable holding the chunk size for the `chunked` kernel.
pub const CHUNK_SIZE_ENV: &str = "LLAMA_DOT_CHUNK_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Kernel variant name, as listed by the registry.
    pub kernel: String,
    /// Elements per chunk for the `chunked` kernel.
    pub chunk_size: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            kernel: REFERENCE_VARIANT.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BridgeConfig {
    /// Defaults overridden by `LLAMA_DOT_KERNEL` / `LLAMA_DOT_CHUNK_SIZE`.
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(kernel) = lookup(KERNEL_ENV) {
            config.kernel = kernel.trim().to_string();
        }
        if let Some(raw) = lookup(CHUNK_SIZE_ENV) {
            config.chunk_size = raw.trim().parse::<usize>().map_err(|e| {
                BridgeError::Config(format!("{}={:?}: {}", CHUNK_SIZE_ENV, raw, e))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> BridgeResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|e| {
            BridgeError::Config(format!("reading {}: {}", path_ref.display(), e))
        })?;
        let config: BridgeConfig = serde_json::from_str(&contents).map_err(|e| {
            BridgeError::Config(format!("parsing {}: {}", path_ref.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BridgeResult<()> {
        if self.chunk_size == 0 {
            return Err(BridgeError::Config("chunk_size must be at least 1".to_string()));
        }
        if self.kernel.is_empty() {
            return Err(BridgeError::Config("kernel name must not be empty".to_string()));
        }
        Ok(())
    }
}
