use std::fmt;

use super::types::{EdgeId, VertexId};

/// Caller contract violations detected by `EdgeStore`.
///
/// None of these are transient; they point at a defect in the calling
/// algorithm and are never recovered from internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeStoreError {
    /// `append` on a store with `size == capacity`.
    CapacityExceeded { capacity: usize },
    /// `increase_capacity` below the live edge count.
    CapacityUnderflow { requested: usize, size: usize },
    /// `vertex` is not an endpoint of `edge`.
    InvalidVertex { edge: EdgeId, vertex: VertexId },
    /// `edge` does not address a live slot.
    EdgeOutOfRange { edge: EdgeId, size: usize },
}

impl fmt::Display for EdgeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStoreError::CapacityExceeded { capacity } => {
                write!(f, "edge store is full (capacity {capacity})")
            }
            EdgeStoreError::CapacityUnderflow { requested, size } => write!(
                f,
                "requested capacity {requested} would drop live edges (size {size})"
            ),
            EdgeStoreError::InvalidVertex { edge, vertex } => {
                write!(f, "vertex {vertex} is not an endpoint of edge {edge}")
            }
            EdgeStoreError::EdgeOutOfRange { edge, size } => {
                write!(f, "edge {edge} is not live (size {size})")
            }
        }
    }
}

impl std::error::Error for EdgeStoreError {}
