//! Combinatorial substrate for planar-graph algorithms.
//!
//! Layout
//! - `edges`: flat, preallocated edge store that also encodes the rotation
//!   system (cyclic order of edges around each vertex) of a planar embedding.
//! - `queue`: two-stack FIFO used by breadth-first phases.
//! - `rotation`: helpers for threading, walking, and validating rotations.
//! - `bfs`: breadth-first layering over an embedded edge store.
//!
//! API Policy
//! - Structural mutators return `Result` and fail fast on caller contract
//!   violations. Hot-path navigation accessors only `debug_assert!` them.
//! - Everything is single-threaded and synchronous; no I/O.

pub mod bfs;
pub mod edges;
pub mod queue;
pub mod rotation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bfs::{bfs_levels, incidence, BfsError, Levels};
pub use edges::{
    EdgeId, EdgeStore, EdgeStoreError, EdgeView, Endpoint, StoreCfg, VertexId, NO_EDGE,
};
pub use queue::FifoQueue;
pub use rotation::{
    around, count_faces, face, from_rotations, thread_rotation, validate, RotationError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bfs::{bfs_levels, Levels};
    pub use crate::edges::{EdgeId, EdgeStore, StoreCfg, VertexId, NO_EDGE};
    pub use crate::queue::FifoQueue;
    pub use crate::rotation::{around, face, from_rotations, thread_rotation, validate};
}
