//! Bit-packed binary hypervector

use crate::error::{HdcError, Result};
use crate::vector::Hypervector;
use rand::Rng;
use std::fmt;

/// Number of bits per storage word
pub const WORD_BITS: usize = 64;

/// A binary hypervector with its bits packed into `u64` words
///
/// The dimensionality is fixed at construction and always rounds up to a
/// whole number of words, so a request for 10,000 bits yields 10,048.
/// Every bit of every word belongs to the vector; there are no padding
/// bits. Bit `i` lives in word `i / 64`, counted from the most significant
/// bit down (bit 0 of the vector is the top bit of word 0).
///
/// # Example
///
/// ```rust
/// use hypervec::BinaryVector;
///
/// let v1 = BinaryVector::random(1024);
/// let v2 = BinaryVector::random(1024);
/// let bound = v1.bind(&v2).unwrap();
/// let dist = v1.distance(&v2).unwrap();
/// assert!(dist > 0.0 && dist < 1.0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryVector {
    words: Vec<u64>,
}

impl BinaryVector {
    /// Creates a vector with all bits cleared
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let zero = BinaryVector::zero(1024);
    /// assert_eq!(zero.popcount(), 0);
    /// assert_eq!(zero.dim(), 1024);
    /// ```
    pub fn zero(dim: usize) -> Self {
        assert!(dim > 0, "dimension must be positive");
        let len = (dim + WORD_BITS - 1) / WORD_BITS;
        Self {
            words: vec![0u64; len],
        }
    }

    /// Creates a random vector with ~50% bits set
    ///
    /// Uses the thread-local RNG.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let random = BinaryVector::random(10_000);
    /// let count = random.popcount();
    /// // Should land around 5,024 of the 10,048 stored bits
    /// assert!(count > 4500 && count < 5600);
    /// ```
    pub fn random(dim: usize) -> Self {
        let mut rng = rand::thread_rng();
        let mut v = Self::zero(dim);

        for word in v.words.iter_mut() {
            *word = rng.gen();
        }

        v
    }

    /// Creates a vector from a seed for reproducibility
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let v1 = BinaryVector::from_seed(1024, 42);
    /// let v2 = BinaryVector::from_seed(1024, 42);
    /// assert_eq!(v1, v2);
    /// ```
    pub fn from_seed(dim: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut v = Self::zero(dim);

        for word in v.words.iter_mut() {
            *word = rng.gen();
        }

        v
    }

    /// Builds a vector directly from its storage words
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn from_words(words: Vec<u64>) -> Self {
        assert!(!words.is_empty(), "at least one word required");
        Self { words }
    }

    /// Dimensionality in bits (always a multiple of 64)
    #[inline]
    pub fn dim(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the internal word slice (for advanced use cases)
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Reads the bit at `pos`
    ///
    /// # Panics
    ///
    /// Panics if `pos >= dim()`.
    #[inline]
    pub fn get(&self, pos: usize) -> bool {
        assert!(
            pos < self.dim(),
            "bit index {} out of range for dimension {}",
            pos,
            self.dim()
        );
        let word = self.words[pos / WORD_BITS];
        (word >> (WORD_BITS - 1 - pos % WORD_BITS)) & 1 == 1
    }

    /// Writes the bit at `pos`
    ///
    /// # Panics
    ///
    /// Panics if `pos >= dim()`.
    #[inline]
    pub fn set(&mut self, pos: usize, bit: bool) {
        assert!(
            pos < self.dim(),
            "bit index {} out of range for dimension {}",
            pos,
            self.dim()
        );
        let mask = 1u64 << (WORD_BITS - 1 - pos % WORD_BITS);
        if bit {
            self.words[pos / WORD_BITS] |= mask;
        } else {
            self.words[pos / WORD_BITS] &= !mask;
        }
    }

    /// Binds two vectors using XOR
    ///
    /// Binding is associative, commutative and self-inverse:
    /// `a.bind(b).bind(b) == a`. The result is dissimilar to both inputs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let a = BinaryVector::random(1024);
    /// let b = BinaryVector::random(1024);
    /// let bound = a.bind(&b).unwrap();
    ///
    /// // Self-inverse property
    /// assert_eq!(bound.bind(&b).unwrap(), a);
    /// ```
    #[inline]
    pub fn bind(&self, other: &Self) -> Result<Self> {
        self.check_dim(other)?;
        let mut result = Self {
            words: vec![0u64; self.words.len()],
        };

        for i in 0..self.words.len() {
            result.words[i] = self.words[i] ^ other.words[i];
        }

        Ok(result)
    }

    /// Bundles multiple vectors by majority voting on each bit
    ///
    /// For every bit position the output is 1 iff strictly more than half
    /// of the inputs have it set, so even-sized ties resolve to 0. The
    /// tie-break is part of the contract; classifier accuracy depends on
    /// it staying consistent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let v1 = BinaryVector::from_seed(1024, 1);
    /// let v2 = BinaryVector::from_seed(1024, 2);
    /// let v3 = BinaryVector::from_seed(1024, 3);
    ///
    /// let bundled = BinaryVector::bundle(&[v1.clone(), v2, v3]).unwrap();
    /// // Bundled vector is similar to all inputs
    /// assert!(bundled.distance(&v1).unwrap() < 0.4);
    /// ```
    pub fn bundle(vectors: &[Self]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(HdcError::EmptyVectorSet);
        }

        if vectors.len() == 1 {
            return Ok(vectors[0].clone());
        }

        let dim = vectors[0].dim();
        for v in &vectors[1..] {
            if v.dim() != dim {
                return Err(HdcError::DimensionMismatch {
                    expected: dim,
                    actual: v.dim(),
                });
            }
        }

        let threshold = vectors.len() / 2;
        let len = vectors[0].words.len();
        let words: Vec<u64>;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            words = (0..len)
                .into_par_iter()
                .map(|word_idx| Self::majority_word(vectors, word_idx, threshold))
                .collect();
        }

        #[cfg(not(feature = "parallel"))]
        {
            words = (0..len)
                .map(|word_idx| Self::majority_word(vectors, word_idx, threshold))
                .collect();
        }

        Ok(Self { words })
    }

    /// Majority vote across all vectors for one storage word
    fn majority_word(vectors: &[Self], word_idx: usize, threshold: usize) -> u64 {
        // Count bits at each position within this word
        let mut counts = [0u32; WORD_BITS];

        for vector in vectors {
            let word = vector.words[word_idx];
            for (bit_pos, count) in counts.iter_mut().enumerate() {
                *count += ((word >> bit_pos) & 1) as u32;
            }
        }

        // Build the result word from majority votes
        let mut result_word = 0u64;
        for (bit_pos, &count) in counts.iter().enumerate() {
            if count as usize > threshold {
                result_word |= 1u64 << bit_pos;
            }
        }
        result_word
    }

    /// Fast bundle for exactly three vectors using bitwise majority
    ///
    /// Single pass, equivalent to the general majority rule at n = 3.
    #[inline]
    pub fn bundle3(a: &Self, b: &Self, c: &Self) -> Result<Self> {
        a.check_dim(b)?;
        a.check_dim(c)?;
        let mut result = Self {
            words: vec![0u64; a.words.len()],
        };

        // Majority of 3 bits: (a & b) | (b & c) | (a & c)
        for i in 0..a.words.len() {
            let wa = a.words[i];
            let wb = b.words[i];
            let wc = c.words[i];
            result.words[i] = (wa & wb) | (wb & wc) | (wa & wc);
        }

        Ok(result)
    }

    /// Rotates the whole bit-stream left by `times` positions
    ///
    /// The vector is treated as one circular bit string spanning all words:
    /// the top bit of each word carries into the bottom of the previous
    /// word and the first word's top bit wraps around to the last word.
    /// `times` reduces modulo the dimension, so `permute(0)` and
    /// `permute(dim)` are both the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let v = BinaryVector::random(1024);
    /// let p = v.permute(100);
    /// let back = p.permute(1024 - 100);
    /// assert_eq!(v, back);
    /// ```
    pub fn permute(&self, times: usize) -> Self {
        let dim = self.dim();
        let shift = times % dim;
        if shift == 0 {
            return self.clone();
        }

        let len = self.words.len();
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;

        // Whole-word rotation first
        let mut rotated = vec![0u64; len];
        for (w, slot) in rotated.iter_mut().enumerate() {
            *slot = self.words[(w + word_shift) % len];
        }

        if bit_shift == 0 {
            return Self { words: rotated };
        }

        // Sub-word shift with carry from the following word
        let mut words = vec![0u64; len];
        for (w, slot) in words.iter_mut().enumerate() {
            let next = rotated[(w + 1) % len];
            *slot = (rotated[w] << bit_shift) | (next >> (WORD_BITS - bit_shift));
        }

        Self { words }
    }

    /// Inverts every bit
    pub fn invert(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
    }

    /// Inverts `count` contiguous bits starting at `start`
    ///
    /// # Panics
    ///
    /// Panics if `start + count > dim()`.
    pub fn invert_range(&mut self, start: usize, count: usize) {
        assert!(
            start + count <= self.dim(),
            "bit range {}..{} out of range for dimension {}",
            start,
            start + count,
            self.dim()
        );
        if count == 0 {
            return;
        }

        let end = start + count;
        let first_word = start / WORD_BITS;
        let last_word = (end - 1) / WORD_BITS;

        for w in first_word..=last_word {
            let word_start = w * WORD_BITS;
            let lo = start.max(word_start) - word_start;
            let hi = end.min(word_start + WORD_BITS) - word_start;
            // Bits lo..hi counted from the most significant end
            let mask = (!0u64 << (WORD_BITS - (hi - lo))) >> lo;
            self.words[w] ^= mask;
        }
    }

    /// Computes the Hamming distance (number of differing bits)
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let a = BinaryVector::random(1024);
    /// assert_eq!(a.hamming(&a).unwrap(), 0);
    /// ```
    #[inline]
    pub fn hamming(&self, other: &Self) -> Result<u32> {
        self.check_dim(other)?;

        // Unrolled loop for better instruction-level parallelism,
        // four words per iteration
        let mut d0 = 0u32;
        let mut d1 = 0u32;
        let mut d2 = 0u32;
        let mut d3 = 0u32;

        let len = self.words.len();
        let chunks = len / 4;
        let remainder = len % 4;

        for i in 0..chunks {
            let base = i * 4;
            d0 += (self.words[base] ^ other.words[base]).count_ones();
            d1 += (self.words[base + 1] ^ other.words[base + 1]).count_ones();
            d2 += (self.words[base + 2] ^ other.words[base + 2]).count_ones();
            d3 += (self.words[base + 3] ^ other.words[base + 3]).count_ones();
        }

        let base = chunks * 4;
        for i in 0..remainder {
            d0 += (self.words[base + i] ^ other.words[base + i]).count_ones();
        }

        Ok(d0 + d1 + d2 + d3)
    }

    /// Normalized Hamming distance in `[0.0, 1.0]`
    ///
    /// 0.0 means identical, ~0.5 means statistically orthogonal for random
    /// vectors, 1.0 means complementary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let a = BinaryVector::random(10_000);
    /// let b = BinaryVector::random(10_000);
    /// let d = a.distance(&b).unwrap();
    /// assert!(d > 0.4 && d < 0.6);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> Result<f32> {
        Ok(self.hamming(other)? as f32 / self.dim() as f32)
    }

    /// Counts the number of set bits
    #[inline]
    pub fn popcount(&self) -> u32 {
        self.words.iter().map(|&w| w.count_ones()).sum()
    }

    /// Serializes the vector as one fixed-width hex string
    ///
    /// Each word renders as 16 zero-padded hex digits, most significant
    /// nibble first, so bit 0 of the vector sits in the first digit.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * 16);
        for word in &self.words {
            out.push_str(&format!("{:016x}", word));
        }
        out
    }

    /// Reconstructs a vector from its hex serialization
    ///
    /// The string length must be a nonzero multiple of 16 digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::BinaryVector;
    ///
    /// let v = BinaryVector::from_seed(1024, 3);
    /// let decoded = BinaryVector::from_hex(&v.to_hex()).unwrap();
    /// assert_eq!(decoded, v);
    /// ```
    pub fn from_hex(encoded: &str) -> Result<Self> {
        if encoded.is_empty() || encoded.len() % 16 != 0 {
            return Err(HdcError::FormatError {
                expected: 16,
                actual: encoded.len(),
            });
        }

        let mut words = Vec::with_capacity(encoded.len() / 16);
        for chunk in encoded.as_bytes().chunks(16) {
            let digits = std::str::from_utf8(chunk)
                .map_err(|_| HdcError::SerializationError("non-ASCII hex digits".into()))?;
            let word = u64::from_str_radix(digits, 16).map_err(|e| {
                HdcError::SerializationError(format!("invalid hex digits {:?}: {}", digits, e))
            })?;
            words.push(word);
        }

        Ok(Self { words })
    }

    #[inline]
    fn check_dim(&self, other: &Self) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(HdcError::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(())
    }
}

impl Hypervector for BinaryVector {
    fn zero(dim: usize) -> Self {
        BinaryVector::zero(dim)
    }

    fn random(dim: usize) -> Self {
        BinaryVector::random(dim)
    }

    fn from_seed(dim: usize, seed: u64) -> Self {
        BinaryVector::from_seed(dim, seed)
    }

    fn dim(&self) -> usize {
        BinaryVector::dim(self)
    }

    fn bind(&self, other: &Self) -> Result<Self> {
        BinaryVector::bind(self, other)
    }

    fn bundle(vectors: &[Self]) -> Result<Self> {
        BinaryVector::bundle(vectors)
    }

    fn bundle3(a: &Self, b: &Self, c: &Self) -> Result<Self> {
        BinaryVector::bundle3(a, b, c)
    }

    fn permute(&self, times: usize) -> Self {
        BinaryVector::permute(self, times)
    }

    fn invert(&mut self) {
        BinaryVector::invert(self)
    }

    fn invert_range(&mut self, start: usize, count: usize) {
        BinaryVector::invert_range(self, start, count)
    }

    fn distance(&self, other: &Self) -> Result<f32> {
        BinaryVector::distance(self, other)
    }

    fn to_hex(&self) -> String {
        BinaryVector::to_hex(self)
    }

    fn from_hex(encoded: &str) -> Result<Self> {
        BinaryVector::from_hex(encoded)
    }
}

impl fmt::Debug for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryVector {{ {} set / {} bits }}",
            self.popcount(),
            self.dim()
        )
    }
}
