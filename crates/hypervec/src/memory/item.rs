//! Item memory: one random vector per discrete symbol

use crate::error::{HdcError, Result};
use crate::memory::persist;
use crate::vector::Hypervector;
use std::path::Path;

/// A fixed table of independently random vectors
///
/// Entry `i` stands for discrete symbol `i` (a channel, a pixel position,
/// a letter). Entries are drawn independently, so any two of them sit
/// near the orthogonality distance and binding against them yields
/// separable codes.
///
/// # Example
///
/// ```rust
/// use hypervec::{BinaryVector, ItemMemory};
///
/// let im: ItemMemory<BinaryVector> = ItemMemory::new(4, 1024);
/// assert_eq!(im.len(), 4);
///
/// let d = im.at(0).unwrap().distance(im.at(1).unwrap()).unwrap();
/// assert!(d > 0.4);
/// ```
#[derive(Clone, Debug)]
pub struct ItemMemory<V> {
    entries: Vec<V>,
}

impl<V: Hypervector> ItemMemory<V> {
    /// Creates a memory of `size` random vectors of `dim` dimensions
    pub fn new(size: usize, dim: usize) -> Self {
        Self {
            entries: (0..size).map(|_| V::random(dim)).collect(),
        }
    }

    /// Creates a reproducible memory; entry `i` derives from `seed + i`
    pub fn with_seed(size: usize, dim: usize, seed: u64) -> Self {
        Self {
            entries: (0..size)
                .map(|i| V::from_seed(dim, seed.wrapping_add(i as u64)))
                .collect(),
        }
    }

    /// Wraps an existing vector sequence
    pub fn from_entries(entries: Vec<V>) -> Self {
        Self { entries }
    }

    /// Returns entry `index`
    pub fn at(&self, index: usize) -> Result<&V> {
        self.entries.get(index).ok_or(HdcError::IndexOutOfBounds {
            index,
            len: self.entries.len(),
        })
    }

    /// Appends an entry for incremental builds
    pub fn push(&mut self, v: V) {
        self.entries.push(v);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the memory holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in index order
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.entries.iter()
    }

    /// Writes the memory to `path`, one vector per line
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save_vectors(path, &self.entries)
    }

    /// Reads a memory back from `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            entries: persist::load_vectors(path)?,
        })
    }
}
