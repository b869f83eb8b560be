//! Hypervector representations
//!
//! Two concrete representations share one capability set: [`BinaryVector`]
//! packs bits into `u64` words, [`NumericVector`] stores one element per
//! dimension for `i32`, `f32` and `f64`. Memories, encoders and the trainer
//! are generic over the [`Hypervector`] trait so either representation can
//! back an experiment.

mod binary;
mod numeric;

pub use binary::{BinaryVector, WORD_BITS};
pub use numeric::{Element, NumericVector};

use crate::error::Result;
use std::fmt;

/// Capability set shared by all hypervector representations
///
/// The representation is picked once per experiment, so everything generic
/// over `V: Hypervector` compiles to static dispatch.
///
/// # Example
///
/// ```rust
/// use hypervec::{BinaryVector, Hypervector};
///
/// fn centroid<V: Hypervector>(vectors: &[V]) -> hypervec::Result<V> {
///     V::bundle(vectors)
/// }
///
/// let vs: Vec<BinaryVector> = (0..3).map(|i| BinaryVector::from_seed(1024, i)).collect();
/// let c = centroid(&vs).unwrap();
/// assert_eq!(c.dim(), 1024);
/// ```
pub trait Hypervector: Clone + PartialEq + fmt::Debug + Sized {
    /// Creates a vector of the given dimensionality with neutral content
    fn zero(dim: usize) -> Self;

    /// Creates an independently random vector
    fn random(dim: usize) -> Self;

    /// Creates a reproducible random vector from a seed
    fn from_seed(dim: usize, seed: u64) -> Self;

    /// Actual dimensionality (may exceed the requested one for packed
    /// representations)
    fn dim(&self) -> usize;

    /// Binds two vectors into one dissimilar to both
    fn bind(&self, other: &Self) -> Result<Self>;

    /// Bundles a set of vectors into one similar to all of them
    fn bundle(vectors: &[Self]) -> Result<Self>;

    /// Bundles exactly three vectors
    ///
    /// Equivalent to `bundle(&[a, b, c])`; representations may override
    /// this with a closed-form fast path.
    fn bundle3(a: &Self, b: &Self, c: &Self) -> Result<Self> {
        Self::bundle(&[a.clone(), b.clone(), c.clone()])
    }

    /// Cyclic rotation used to encode sequence positions
    fn permute(&self, times: usize) -> Self;

    /// Inverts every dimension in place
    fn invert(&mut self);

    /// Inverts `count` contiguous dimensions starting at `start`
    fn invert_range(&mut self, start: usize, count: usize);

    /// Normalized distance in `[0.0, 1.0]`; 0 means identical
    fn distance(&self, other: &Self) -> Result<f32>;

    /// Serializes the vector as a fixed-width hex string
    fn to_hex(&self) -> String;

    /// Reconstructs a vector from its hex serialization
    fn from_hex(encoded: &str) -> Result<Self>;
}
