//! Shared text persistence for vector sequences
//!
//! One serialized vector per line, fixed-width hex. Loading stops at end
//! of file or at the first blank line. Every memory type persists through
//! these two functions instead of carrying its own file format.

use crate::error::{HdcError, Result};
use crate::vector::Hypervector;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn io_error(path: &Path, source: std::io::Error) -> HdcError {
    HdcError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes one vector per line to `path`, replacing any existing file
pub fn save_vectors<V, P>(path: P, vectors: &[V]) -> Result<()>
where
    V: Hypervector,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for v in vectors {
        writeln!(writer, "{}", v.to_hex()).map_err(|e| io_error(path, e))?;
    }
    writer.flush().map_err(|e| io_error(path, e))?;

    tracing::debug!("Saved {} vectors to {}", vectors.len(), path.display());
    Ok(())
}

/// Reads vectors from `path` until end of file or a blank line
///
/// The dimensionality comes from the line width; a line of the wrong
/// length fails with a format error rather than truncating.
pub fn load_vectors<V, P>(path: P) -> Result<Vec<V>>
where
    V: Hypervector,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let reader = BufReader::new(file);

    let mut vectors = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| io_error(path, e))?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        vectors.push(V::from_hex(line)?);
    }

    tracing::debug!("Loaded {} vectors from {}", vectors.len(), path.display());
    Ok(vectors)
}
