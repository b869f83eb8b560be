//! Dense bipolar hypervector generic over the element type

use crate::error::{HdcError, Result};
use crate::vector::Hypervector;
use rand::Rng;
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// Element types a [`NumericVector`] can carry
///
/// Implemented for `i32`, `f32` and `f64`. Elements start out bipolar
/// (+1 or -1); bundling sums them, so integer elements grow with the
/// bundle size while the cosine distance stays scale-free.
pub trait Element:
    Copy + PartialEq + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Hex digits per serialized element
    const HEX_WIDTH: usize;

    /// Additive identity
    fn zero() -> Self;

    /// Samples +1 or -1 with equal probability
    fn random_bipolar<R: Rng>(rng: &mut R) -> Self;

    /// Widens to `f64` for cosine accumulation
    fn to_f64(self) -> f64;

    /// Renders the element's raw bit pattern as fixed-width hex
    fn encode_hex(self) -> String;

    /// Parses an element back from `HEX_WIDTH` hex digits
    fn decode_hex(digits: &str) -> Result<Self>;
}

fn bad_digits(digits: &str, err: std::num::ParseIntError) -> HdcError {
    HdcError::SerializationError(format!("invalid hex digits {:?}: {}", digits, err))
}

impl Element for i32 {
    const HEX_WIDTH: usize = 8;

    fn zero() -> Self {
        0
    }

    fn random_bipolar<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            1
        } else {
            -1
        }
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn encode_hex(self) -> String {
        // Two's complement bit pattern
        format!("{:08x}", self as u32)
    }

    fn decode_hex(digits: &str) -> Result<Self> {
        u32::from_str_radix(digits, 16)
            .map(|bits| bits as i32)
            .map_err(|e| bad_digits(digits, e))
    }
}

impl Element for f32 {
    const HEX_WIDTH: usize = 8;

    fn zero() -> Self {
        0.0
    }

    fn random_bipolar<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn encode_hex(self) -> String {
        // IEEE-754 bit pattern
        format!("{:08x}", self.to_bits())
    }

    fn decode_hex(digits: &str) -> Result<Self> {
        u32::from_str_radix(digits, 16)
            .map(f32::from_bits)
            .map_err(|e| bad_digits(digits, e))
    }
}

impl Element for f64 {
    const HEX_WIDTH: usize = 16;

    fn zero() -> Self {
        0.0
    }

    fn random_bipolar<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn encode_hex(self) -> String {
        format!("{:016x}", self.to_bits())
    }

    fn decode_hex(digits: &str) -> Result<Self> {
        u64::from_str_radix(digits, 16)
            .map(f64::from_bits)
            .map_err(|e| bad_digits(digits, e))
    }
}

/// A dense hypervector with one element per dimension
///
/// Random construction yields a bipolar vector (every element +1 or -1).
/// Binding multiplies element-wise, bundling sums element-wise, and
/// distance derives from the cosine similarity, so the type behaves like
/// the binary representation at the algebra level while keeping graded
/// magnitudes through bundling.
///
/// # Example
///
/// ```rust
/// use hypervec::NumericVector;
///
/// let a = NumericVector::<f32>::random(1024);
/// let b = NumericVector::<f32>::random(1024);
/// let bound = a.bind(&b).unwrap();
/// assert_eq!(bound.dim(), 1024);
///
/// // Binding with a bipolar vector is self-inverse
/// assert_eq!(bound.bind(&b).unwrap(), a);
/// ```
#[derive(Clone, PartialEq)]
pub struct NumericVector<T> {
    elems: Vec<T>,
}

impl<T: Element> NumericVector<T> {
    /// Creates a vector with every element zero
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    pub fn zero(dim: usize) -> Self {
        assert!(dim > 0, "dimension must be positive");
        Self {
            elems: vec![T::zero(); dim],
        }
    }

    /// Creates a random bipolar vector
    pub fn random(dim: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self::fill(dim, &mut rng)
    }

    /// Creates a reproducible bipolar vector from a seed
    ///
    /// # Example
    ///
    /// ```rust
    /// use hypervec::NumericVector;
    ///
    /// let v1 = NumericVector::<i32>::from_seed(256, 7);
    /// let v2 = NumericVector::<i32>::from_seed(256, 7);
    /// assert_eq!(v1, v2);
    /// ```
    pub fn from_seed(dim: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::fill(dim, &mut rng)
    }

    fn fill<R: Rng>(dim: usize, rng: &mut R) -> Self {
        assert!(dim > 0, "dimension must be positive");
        Self {
            elems: (0..dim).map(|_| T::random_bipolar(rng)).collect(),
        }
    }

    /// Builds a vector directly from its elements
    ///
    /// # Panics
    ///
    /// Panics if `elems` is empty.
    pub fn from_elems(elems: Vec<T>) -> Self {
        assert!(!elems.is_empty(), "at least one element required");
        Self { elems }
    }

    /// Dimensionality in elements
    #[inline]
    pub fn dim(&self) -> usize {
        self.elems.len()
    }

    /// Returns the element at `pos`
    ///
    /// Panics out of range, like slice indexing.
    #[inline]
    pub fn get(&self, pos: usize) -> T {
        self.elems[pos]
    }

    /// Returns the internal element slice
    #[inline]
    pub fn elems(&self) -> &[T] {
        &self.elems
    }

    /// Binds two vectors by element-wise multiplication
    pub fn bind(&self, other: &Self) -> Result<Self> {
        self.check_dim(other)?;
        let elems = self
            .elems
            .iter()
            .zip(&other.elems)
            .map(|(&a, &b)| a * b)
            .collect();
        Ok(Self { elems })
    }

    /// Bundles multiple vectors by element-wise summation
    ///
    /// The sum is not normalized; for many near-orthogonal bipolar inputs
    /// it approximates the majority without an explicit threshold.
    pub fn bundle(vectors: &[Self]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(HdcError::EmptyVectorSet);
        }

        if vectors.len() == 1 {
            return Ok(vectors[0].clone());
        }

        let mut acc = vectors[0].clone();
        for v in &vectors[1..] {
            acc.check_dim(v)?;
            for (slot, &e) in acc.elems.iter_mut().zip(&v.elems) {
                *slot = *slot + e;
            }
        }

        Ok(acc)
    }

    /// Rotates the element sequence right by `times` positions
    ///
    /// Each step moves the last element to the front. `times` reduces
    /// modulo the dimension.
    pub fn permute(&self, times: usize) -> Self {
        let mut out = self.clone();
        let shift = times % self.dim();
        out.elems.rotate_right(shift);
        out
    }

    /// Negates every element
    pub fn invert(&mut self) {
        for e in self.elems.iter_mut() {
            *e = -*e;
        }
    }

    /// Negates `count` contiguous elements starting at `start`
    ///
    /// # Panics
    ///
    /// Panics if `start + count > dim()`.
    pub fn invert_range(&mut self, start: usize, count: usize) {
        assert!(
            start + count <= self.dim(),
            "element range {}..{} out of range for dimension {}",
            start,
            start + count,
            self.dim()
        );
        for e in self.elems[start..start + count].iter_mut() {
            *e = -*e;
        }
    }

    /// Cosine-derived distance in `[0.0, 1.0]`
    ///
    /// Computed as `|1 - cos(a, b)| / 2` with the accumulation in `f64`.
    /// Identical vectors score 0.0, negated ones 1.0, independent random
    /// ones about 0.5. Undefined for a zero-magnitude input; random
    /// construction never produces one.
    pub fn distance(&self, other: &Self) -> Result<f32> {
        self.check_dim(other)?;

        let mut dot = 0.0f64;
        let mut mag_a = 0.0f64;
        let mut mag_b = 0.0f64;

        for (&x, &y) in self.elems.iter().zip(&other.elems) {
            let a = x.to_f64();
            let b = y.to_f64();
            dot += a * b;
            mag_a += a * a;
            mag_b += b * b;
        }

        let cosine = dot / (mag_a.sqrt() * mag_b.sqrt());
        Ok((((1.0 - cosine) / 2.0).abs()) as f32)
    }

    /// Serializes the vector as one fixed-width hex string
    ///
    /// Each element renders its raw bit pattern as [`Element::HEX_WIDTH`]
    /// zero-padded digits.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.elems.len() * T::HEX_WIDTH);
        for e in &self.elems {
            out.push_str(&e.encode_hex());
        }
        out
    }

    /// Reconstructs a vector from its hex serialization
    ///
    /// The string length must be a nonzero multiple of the element width.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        if encoded.is_empty() || encoded.len() % T::HEX_WIDTH != 0 {
            return Err(HdcError::FormatError {
                expected: T::HEX_WIDTH,
                actual: encoded.len(),
            });
        }

        let mut elems = Vec::with_capacity(encoded.len() / T::HEX_WIDTH);
        for chunk in encoded.as_bytes().chunks(T::HEX_WIDTH) {
            let digits = std::str::from_utf8(chunk)
                .map_err(|_| HdcError::SerializationError("non-ASCII hex digits".into()))?;
            elems.push(T::decode_hex(digits)?);
        }

        Ok(Self { elems })
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

impl<T: Element> Hypervector for NumericVector<T> {
    fn zero(dim: usize) -> Self {
        NumericVector::zero(dim)
    }

    fn random(dim: usize) -> Self {
        NumericVector::random(dim)
    }

    fn from_seed(dim: usize, seed: u64) -> Self {
        NumericVector::from_seed(dim, seed)
    }

    fn dim(&self) -> usize {
        NumericVector::dim(self)
    }

    fn bind(&self, other: &Self) -> Result<Self> {
        NumericVector::bind(self, other)
    }

    fn bundle(vectors: &[Self]) -> Result<Self> {
        NumericVector::bundle(vectors)
    }

    fn permute(&self, times: usize) -> Self {
        NumericVector::permute(self, times)
    }

    fn invert(&mut self) {
        NumericVector::invert(self)
    }

    fn invert_range(&mut self, start: usize, count: usize) {
        NumericVector::invert_range(self, start, count)
    }

    fn distance(&self, other: &Self) -> Result<f32> {
        NumericVector::distance(self, other)
    }

    fn to_hex(&self) -> String {
        NumericVector::to_hex(self)
    }

    fn from_hex(encoded: &str) -> Result<Self> {
        NumericVector::from_hex(encoded)
    }
}

impl<T: Element> fmt::Debug for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericVector {{ dim: {} }}", self.dim())
    }
}
