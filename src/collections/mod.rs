//! Array-backed containers used by the search engine: a growable [Sequence] that can act as a
//! list, stack or FIFO queue, and a binary min-heap ([NodeHeap]) of grid cells built on top of it.
use thiserror::Error;

pub mod heap;
pub mod sequence;

pub use heap::{NodeHeap, PriorityEntry};
pub use sequence::Sequence;

/// Misuse of the low-level containers. These are programmer errors and are surfaced immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A container was created with room for zero elements.
    #[error("initial capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    /// An index fell outside the currently stored elements.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An element was removed from an empty container.
    #[error("container is empty")]
    Empty,
}
