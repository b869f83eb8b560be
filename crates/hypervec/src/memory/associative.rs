//! Associative memory: class prototypes with nearest-neighbor search

use crate::error::{HdcError, Result};
use crate::memory::persist;
use crate::vector::Hypervector;
use std::path::Path;

/// A store of class-prototype vectors searched by minimum distance
///
/// Prototype `i` stands for class label `i`. [`search`](Self::search)
/// scans all prototypes and returns the index of the closest one; with
/// equal distances the lowest index wins, so predictions are
/// deterministic for a given memory state.
///
/// # Example
///
/// ```rust
/// use hypervec::{AssociativeMemory, BinaryVector};
///
/// let class0 = BinaryVector::from_seed(1024, 1);
/// let class1 = BinaryVector::from_seed(1024, 2);
/// let am = AssociativeMemory::from_prototypes(vec![class0.clone(), class1]);
///
/// assert_eq!(am.search(&class0).unwrap(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct AssociativeMemory<V> {
    prototypes: Vec<V>,
}

impl<V: Hypervector> AssociativeMemory<V> {
    /// Creates an empty memory
    pub fn new() -> Self {
        Self {
            prototypes: Vec::new(),
        }
    }

    /// Creates a memory from an existing prototype sequence
    pub fn from_prototypes(prototypes: Vec<V>) -> Self {
        Self { prototypes }
    }

    /// Appends a prototype at the next class index
    pub fn push(&mut self, v: V) {
        self.prototypes.push(v);
    }

    /// Removes all prototypes
    pub fn clear(&mut self) {
        self.prototypes.clear();
    }

    /// Number of stored prototypes
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Whether the memory holds no prototypes
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Returns the prototype for class `index`
    pub fn at(&self, index: usize) -> Result<&V> {
        self.prototypes
            .get(index)
            .ok_or(HdcError::IndexOutOfBounds {
                index,
                len: self.prototypes.len(),
            })
    }

    /// Iterates over the prototypes in class order
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.prototypes.iter()
    }

    /// Finds the class whose prototype is nearest to `query`
    ///
    /// Linear scan in class order; only a strictly smaller distance
    /// replaces the current best, so the first of several equidistant
    /// prototypes wins. Fails on an empty memory or on a prototype with
    /// a different dimensionality than the query.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::{AssociativeMemory, BinaryVector};
    ///
    /// let mut am = AssociativeMemory::new();
    /// am.push(BinaryVector::from_seed(1024, 1));
    /// am.push(BinaryVector::from_seed(1024, 2));
    ///
    /// let query = BinaryVector::from_seed(1024, 2);
    /// assert_eq!(am.search(&query).unwrap(), 1);
    /// ```
    pub fn search(&self, query: &V) -> Result<usize> {
        if self.prototypes.is_empty() {
            return Err(HdcError::EmptyMemory);
        }

        let mut best = 0;
        let mut best_dist = f32::INFINITY;

        for (index, prototype) in self.prototypes.iter().enumerate() {
            let d = query.distance(prototype)?;
            if d < best_dist {
                best_dist = d;
                best = index;
            }
        }

        Ok(best)
    }

    /// Writes the memory to `path`, one prototype per line
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save_vectors(path, &self.prototypes)
    }

    /// Reads a memory back from `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            prototypes: persist::load_vectors(path)?,
        })
    }
}

impl<V: Hypervector> Default for AssociativeMemory<V> {
    fn default() -> Self {
        Self::new()
    }
}
