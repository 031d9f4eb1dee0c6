//! Error types for eestore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::layout::Address;

/// Result type alias using EeError
pub type Result<T> = std::result::Result<T, EeError>;

/// Unified error type for eestore operations
#[derive(Debug, Error)]
pub enum EeError {
    // -------------------------------------------------------------------------
    // Medium Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The medium lost power after `writes` physical byte writes
    #[error("Power lost after {writes} physical writes")]
    PowerLoss { writes: u64 },

    #[error("Image size mismatch: expected {expected} bytes, found {actual}")]
    ImageSize { expected: u64, actual: u64 },

    // -------------------------------------------------------------------------
    // Contract Violations
    // -------------------------------------------------------------------------
    #[error("Access of {len} bytes at address {addr} exceeds capacity {capacity}")]
    AddressOutOfRange {
        addr: Address,
        len: usize,
        capacity: usize,
    },

    #[error("Value {value} does not fit in a {bits}-bit signed slot")]
    ValueOutOfRange { value: i64, bits: u32 },

    #[error("Payload size mismatch: expected {expected} bytes, got {actual}")]
    PayloadSize { expected: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
