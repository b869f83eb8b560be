//! Error types for hypervector operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hypervector operations
pub type Result<T> = std::result::Result<T, HdcError>;

/// Main error type for hypervector operations
#[derive(Error, Debug)]
pub enum HdcError {
    /// Two vectors with different dimensions were combined
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// An operation over a set of vectors received no vectors
    #[error("Empty vector set provided")]
    EmptyVectorSet,

    /// Search was attempted against a memory holding no prototypes
    #[error("Associative memory is empty")]
    EmptyMemory,

    /// Memory lookup outside the stored range
    #[error("Index {index} out of bounds for memory of {len} entries")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of stored entries
        len: usize,
    },

    /// Construction or call-site misuse (bad sizes, ranges, label sets)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A class label has no training examples to bundle
    #[error("No training examples for class {label}")]
    EmptyClass {
        /// Class label with the empty bucket
        label: usize,
    },

    /// A serialized vector line has the wrong length
    #[error("Invalid encoding length: expected a nonzero multiple of {expected} hex digits, got {actual}")]
    FormatError {
        /// Hex digits per encoded unit
        expected: usize,
        /// Length of the line that was read
        actual: usize,
    },

    /// A serialized vector line failed to decode
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// File access failed; carries the offending path
    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        /// Path that failed to open or write
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
