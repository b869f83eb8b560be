//! Free-function wrappers over the vector operations
//!
//! Thin generic conveniences so encoder and driver code can compose
//! operations without naming the concrete representation.

use crate::error::{HdcError, Result};
use crate::vector::Hypervector;

/// Binds two hypervectors
///
/// Convenience equivalent of `a.bind(&b)`.
///
/// # Example
///
/// ```rust
/// use hypervec::{bind, BinaryVector};
///
/// let a = BinaryVector::random(1024);
/// let b = BinaryVector::random(1024);
/// let bound = bind(&a, &b).unwrap();
/// ```
#[inline]
pub fn bind<V: Hypervector>(a: &V, b: &V) -> Result<V> {
    a.bind(b)
}

/// Binds a sequence of vectors left to right
///
/// Equivalent to `v1.bind(&v2).bind(&v3)...`; used by temporal encoders
/// to collapse a window of permuted records into one query.
pub fn bind_multiple<V: Hypervector>(vectors: &[V]) -> Result<V> {
    if vectors.is_empty() {
        return Err(HdcError::EmptyVectorSet);
    }

    let mut result = vectors[0].clone();
    for v in &vectors[1..] {
        result = result.bind(v)?;
    }

    Ok(result)
}

/// Bundles multiple hypervectors
///
/// Convenience equivalent of `V::bundle(vectors)`.
///
/// # Example
///
/// ```rust
/// use hypervec::{bundle, BinaryVector};
///
/// let vs: Vec<_> = (0..3).map(|i| BinaryVector::from_seed(1024, i)).collect();
/// let bundled = bundle(&vs).unwrap();
/// ```
pub fn bundle<V: Hypervector>(vectors: &[V]) -> Result<V> {
    V::bundle(vectors)
}

/// Bundles exactly three hypervectors
#[inline]
pub fn bundle3<V: Hypervector>(a: &V, b: &V, c: &V) -> Result<V> {
    V::bundle3(a, b, c)
}

/// Permutes a hypervector by cyclic rotation
///
/// Permutation produces a representation dissimilar to the original,
/// which encodes sequence positions.
#[inline]
pub fn permute<V: Hypervector>(v: &V, times: usize) -> V {
    v.permute(times)
}

/// Returns a copy with every dimension inverted
///
/// # Example
///
/// ```rust
/// use hypervec::{invert, BinaryVector};
///
/// let v = BinaryVector::random(1024);
/// let inv = invert(&v);
/// assert_eq!(v.distance(&inv).unwrap(), 1.0);
/// ```
pub fn invert<V: Hypervector>(v: &V) -> V {
    let mut out = v.clone();
    out.invert();
    out
}

/// Normalized distance between two hypervectors
#[inline]
pub fn distance<V: Hypervector>(a: &V, b: &V) -> Result<f32> {
    a.distance(b)
}

/// Distances from one query to every vector in a batch
///
/// With the `parallel` feature the batch is scanned with rayon; the
/// results are identical either way.
pub fn batch_distances<V: Hypervector + Sync>(query: &V, vectors: &[V]) -> Result<Vec<f32>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        return vectors.par_iter().map(|v| query.distance(v)).collect();
    }

    #[cfg(not(feature = "parallel"))]
    {
        vectors.iter().map(|v| query.distance(v)).collect()
    }
}
