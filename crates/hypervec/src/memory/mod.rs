//! Memory structures built on hypervectors
//!
//! Three flavors share the same persistence utility and are generic over
//! the vector representation:
//!
//! - [`ItemMemory`]: independent random vectors, one per discrete symbol
//! - [`ContinuousItemMemory`]: a similarity gradient over ordered levels
//! - [`AssociativeMemory`]: class prototypes with nearest-neighbor search

mod associative;
mod continuous;
mod item;
pub mod persist;

pub use associative::AssociativeMemory;
pub use continuous::ContinuousItemMemory;
pub use item::ItemMemory;
