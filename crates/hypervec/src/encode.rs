//! Record and sequence encoders built from item-memory lookups
//!
//! A record is a set of (position, level) readings: each position binds its
//! item-memory vector with the continuous-item-memory vector for its level,
//! and the bound pairs are bundled into one hypervector. Sequences of
//! records can additionally be combined spatially (one flat bundle) or
//! temporally (per-frame records permuted by frame index, then bound).

use crate::error::{HdcError, Result};
use crate::memory::{ContinuousItemMemory, ItemMemory};
use crate::ops;
use crate::vector::Hypervector;
use serde::{Deserialize, Serialize};

/// How a multi-frame sequence is collapsed into one hypervector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Bundle every position-bound vector of every frame together
    Spatial,
    /// Permute each frame's record by its frame index, then bind across frames
    Temporal,
}

/// Maps a continuous value in `[min, max]` to a level index in `[0, levels)`
///
/// Bins are uniform; values outside the range clamp to the boundary bins.
///
/// # Example
///
/// ```rust
/// use hypervec::encode::quantize;
///
/// assert_eq!(quantize(0.0, 0.0, 20.0, 21).unwrap(), 0);
/// assert_eq!(quantize(20.0, 0.0, 20.0, 21).unwrap(), 20);
/// assert_eq!(quantize(25.0, 0.0, 20.0, 21).unwrap(), 20);
/// ```
pub fn quantize(value: f32, min: f32, max: f32, levels: usize) -> Result<usize> {
    if levels == 0 {
        return Err(HdcError::InvalidParameter(
            "quantization needs at least one level".to_string(),
        ));
    }
    if !(min < max) {
        return Err(HdcError::InvalidParameter(format!(
            "invalid quantization range [{}, {}]",
            min, max
        )));
    }

    let clamped = value.clamp(min, max);
    let step = (max - min) / levels as f32;

    for bin in 0..levels {
        let top = min + step * (bin + 1) as f32;
        if clamped <= top {
            return Ok(bin);
        }
    }

    // Accumulated rounding can leave the last threshold just below `max`
    Ok(levels - 1)
}

/// Encodes one record of per-position levels into a single hypervector
///
/// Position `i` contributes `bind(im[i], cim[levels[i]])`; the bound pairs
/// are bundled. Fails on an empty record or a level/position outside its
/// memory.
pub fn encode_record<V: Hypervector>(
    im: &ItemMemory<V>,
    cim: &ContinuousItemMemory<V>,
    levels: &[usize],
) -> Result<V> {
    if levels.is_empty() {
        return Err(HdcError::EmptyVectorSet);
    }

    let mut bound = Vec::with_capacity(levels.len());
    for (position, &level) in levels.iter().enumerate() {
        bound.push(im.at(position)?.bind(cim.at(level)?)?);
    }

    V::bundle(&bound)
}

/// Encodes a sequence of per-frame level records into one hypervector
///
/// # Example
///
/// ```rust
/// use hypervec::encode::{encode_sequence, Encoding};
/// use hypervec::{BinaryVector, ContinuousItemMemory, ItemMemory};
///
/// let im: ItemMemory<BinaryVector> = ItemMemory::with_seed(4, 1024, 7);
/// let cim = ContinuousItemMemory::with_seed(8, 1024, 9).unwrap();
///
/// let frames = vec![vec![0, 3, 5, 7], vec![1, 3, 4, 6]];
/// let v = encode_sequence(&im, &cim, &frames, Encoding::Temporal).unwrap();
/// assert_eq!(v.dim(), 1024);
/// ```
pub fn encode_sequence<V: Hypervector>(
    im: &ItemMemory<V>,
    cim: &ContinuousItemMemory<V>,
    frames: &[Vec<usize>],
    encoding: Encoding,
) -> Result<V> {
    if frames.is_empty() {
        return Err(HdcError::EmptyVectorSet);
    }

    match encoding {
        Encoding::Spatial => {
            let mut bound = Vec::new();
            for frame in frames {
                for (position, &level) in frame.iter().enumerate() {
                    bound.push(im.at(position)?.bind(cim.at(level)?)?);
                }
            }
            V::bundle(&bound)
        }
        Encoding::Temporal => {
            let mut records = Vec::with_capacity(frames.len());
            for (t, frame) in frames.iter().enumerate() {
                records.push(encode_record(im, cim, frame)?.permute(t));
            }
            ops::bind_multiple(&records)
        }
    }
}
