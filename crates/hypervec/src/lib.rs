//! # Hypervec
//!
//! Hyperdimensional computing primitives: high-dimensional binary and numeric
//! vectors with a bind/bundle/permute algebra, item memories, and
//! prototype-based classification.
//!
//! ## Features
//!
//! - **Vectors**: bit-packed binary hypervectors and numeric (`i32`/`f32`/`f64`) hypervectors behind one [`Hypervector`] trait
//! - **Algebra**: XOR or multiplicative binding, majority or additive bundling, cyclic permutation, inversion
//! - **Memories**: random item memory, continuous item memory with a linear similarity gradient, associative memory with nearest-prototype search
//! - **Training**: per-class bundling plus iterative retraining that feeds mispredictions back into the class buckets
//! - **Encoding**: record and sequence encoders (spatial and temporal) over item-memory lookups
//! - **Persistence**: newline-delimited hex snapshots for every memory type
//! - **Parallelism**: optional `parallel` feature moves bundling and batch distances onto rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use hypervec::{AssociativeMemory, BinaryVector, Hypervector};
//!
//! // Two reproducible random class prototypes
//! let class0 = BinaryVector::from_seed(1024, 1);
//! let class1 = BinaryVector::from_seed(1024, 2);
//! let am = AssociativeMemory::from_prototypes(vec![class0.clone(), class1]);
//!
//! // A noisy observation of class 0 still lands on class 0
//! let mut query = class0;
//! query.invert_range(0, 64);
//! assert_eq!(am.search(&query).unwrap(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encode;
pub mod error;
pub mod memory;
pub mod ops;
pub mod train;
pub mod vector;

// Re-exports
pub use error::{HdcError, Result};
pub use vector::{BinaryVector, Element, Hypervector, NumericVector, WORD_BITS};

pub use memory::{AssociativeMemory, ContinuousItemMemory, ItemMemory};

pub use encode::{encode_record, encode_sequence, quantize, Encoding};
pub use ops::{batch_distances, bind, bind_multiple, bundle, bundle3, distance, invert, permute};
pub use train::{evaluate, RetrainIteration, RetrainOptions, Trainer};
