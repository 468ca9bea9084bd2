//! Error taxonomy for the bridge.

use std::fmt;

/// Which positional argument of the entry point an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    X,
    W,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::X => f.write_str("x"),
            Argument::W => f.write_str("w"),
        }
    }
}

/// Exception class the host environment raises for each error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostErrorClass {
    TypeError,
    ValueError,
    MemoryError,
    RuntimeError,
}

impl fmt::Display for HostErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostErrorClass::TypeError => "TypeError",
            HostErrorClass::ValueError => "ValueError",
            HostErrorClass::MemoryError => "MemoryError",
            HostErrorClass::RuntimeError => "RuntimeError",
        };
        f.write_str(name)
    }
}

/// Every way a bridge call or its setup can fail.
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error("expected {expected} positional arguments, got {got}")]
    Argument { expected: usize, got: usize },
    #[error("argument {argument} is not a sequence (got {found})")]
    TypeMismatch {
        argument: Argument,
        found: &'static str,
    },
    #[error("element {index} of argument {argument} is not a float (got {found})")]
    ElementTypeMismatch {
        argument: Argument,
        index: usize,
        found: &'static str,
    },
    #[error("vectors must be of the same size (x has {x}, w has {w})")]
    LengthMismatch { x: usize, w: usize },
    #[error("could not allocate {requested} f64 values for argument {argument}")]
    AllocationFailure { argument: Argument, requested: usize },
    #[error("unknown kernel variant '{name}' (available: {available})")]
    UnknownKernel { name: String, available: String },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BridgeError {
    /// The exception class a host binding should raise for this error.
    pub fn host_class(&self) -> HostErrorClass {
        match self {
            BridgeError::Argument { .. }
            | BridgeError::TypeMismatch { .. }
            | BridgeError::ElementTypeMismatch { .. } => HostErrorClass::TypeError,
            BridgeError::LengthMismatch { .. } => HostErrorClass::ValueError,
            BridgeError::AllocationFailure { .. } => HostErrorClass::MemoryError,
            BridgeError::UnknownKernel { .. } | BridgeError::Config(_) => {
                HostErrorClass::RuntimeError
            }
        }
    }

    /// The argument at fault, for errors tied to one input.
    pub fn argument(&self) -> Option<Argument> {
        match self {
            BridgeError::TypeMismatch { argument, .. }
            | BridgeError::ElementTypeMismatch { argument, .. }
            | BridgeError::AllocationFailure { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
