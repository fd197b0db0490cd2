//! Edge store with an embedded rotation system.
//!
//! Purpose
//! - Hold the edges of a planar embedding in flat, preallocated columns
//!   addressed by slot index, and encode per vertex the cyclic order of its
//!   incident edges.
//! - Give O(1) "next/previous edge around this vertex" navigation, the
//!   primitive that face walking and layered search are built from.
//!
//! Model
//! - Each edge stores two endpoints and two (next, previous) link pairs: one
//!   threads the rotation around `vertex1`, the other around `vertex2`. The
//!   pair is selected at access time by comparing the query vertex with the
//!   stored `vertex1`.
//! - The store never checks that links form valid cycles; collaborators set
//!   them with `set_next_edge`/`set_previous_edge` and can audit the result
//!   with `rotation::validate`.
//! - The store is append-only. Merges (`extend`) shift the merged edges'
//!   labels and links into the combined index space.
//!
//! Code cross-refs: `rotation::{thread_rotation, around, face, validate}`,
//! `bfs::bfs_levels`.

mod error;
mod store;
mod types;

pub use error::EdgeStoreError;
pub use store::EdgeStore;
pub use types::{EdgeId, EdgeView, Endpoint, StoreCfg, VertexId, NO_EDGE};

#[cfg(test)]
mod tests;
