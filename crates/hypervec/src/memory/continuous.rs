//! Continuous item memory: a similarity gradient over ordered levels

use crate::error::{HdcError, Result};
use crate::memory::persist;
use crate::vector::Hypervector;
use std::path::Path;

/// A table of vectors whose similarity decays with level distance
///
/// Entry 0 is random; entry `i` is entry `i - 1` with the next contiguous
/// block of `dim / (size - 1)` dimensions inverted, the inversion cursor
/// sweeping once across the whole dimension space. Adjacent levels are
/// therefore near neighbors, while the first and last levels end up as
/// complements of each other. Quantized continuous quantities (amplitudes,
/// pixel intensities) map onto the levels so that close values stay close
/// in vector space.
///
/// # Example
///
/// ```rust
/// use hypervec::{BinaryVector, ContinuousItemMemory};
///
/// let cim: ContinuousItemMemory<BinaryVector> =
///     ContinuousItemMemory::with_seed(5, 1024, 42).unwrap();
///
/// let near = cim.at(0).unwrap().distance(cim.at(1).unwrap()).unwrap();
/// let far = cim.at(0).unwrap().distance(cim.at(4).unwrap()).unwrap();
/// assert!(near < far);
/// assert_eq!(far, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ContinuousItemMemory<V> {
    entries: Vec<V>,
}

impl<V: Hypervector> ContinuousItemMemory<V> {
    /// Creates a gradient of `size` levels over `dim` dimensions
    ///
    /// Fails with an invalid-parameter error when `size <= 1`; the flip
    /// block width divides by `size - 1`.
    pub fn new(size: usize, dim: usize) -> Result<Self> {
        Self::build(size, V::random(dim))
    }

    /// Creates a reproducible gradient from a seed
    pub fn with_seed(size: usize, dim: usize, seed: u64) -> Result<Self> {
        Self::build(size, V::from_seed(dim, seed))
    }

    fn build(size: usize, base: V) -> Result<Self> {
        if size <= 1 {
            return Err(HdcError::InvalidParameter(format!(
                "continuous item memory needs at least 2 levels, got {}",
                size
            )));
        }

        let flips = base.dim() / (size - 1);
        let mut entries = Vec::with_capacity(size);
        let mut cursor = 0;
        let mut prev = base;

        for _ in 1..size {
            let mut next = prev.clone();
            next.invert_range(cursor, flips);
            cursor += flips;
            entries.push(prev);
            prev = next;
        }
        entries.push(prev);

        Ok(Self { entries })
    }

    /// Returns the vector for level `index`
    pub fn at(&self, index: usize) -> Result<&V> {
        self.entries.get(index).ok_or(HdcError::IndexOutOfBounds {
            index,
            len: self.entries.len(),
        })
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the memory holds no levels (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the levels in order
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter()
    }

    /// Writes the memory to `path`, one vector per line
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save_vectors(path, &self.entries)
    }

    /// Reads a memory back from `path`
    ///
    /// The file must hold at least two levels.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let entries = persist::load_vectors(path)?;
        if entries.len() <= 1 {
            return Err(HdcError::InvalidParameter(format!(
                "continuous item memory needs at least 2 levels, got {}",
                entries.len()
            )));
        }
        Ok(Self { entries })
    }
}
