//! Breadth-first layering over an embedded edge store.
//!
//! Neighbours are discovered by walking each vertex's rotation, so the
//! layering only depends on the links collaborators threaded (no adjacency
//! lists are materialised). The frontier is a `FifoQueue`.

use std::fmt;

use tracing::{debug, trace};

use crate::edges::{EdgeId, EdgeStore, VertexId, NO_EDGE};
use crate::queue::FifoQueue;
use crate::rotation::around;

/// Errors surfaced by `bfs_levels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfsError {
    /// `root` is not below the vertex count.
    RootOutOfRange { root: VertexId, vertex_count: usize },
}

impl fmt::Display for BfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BfsError::RootOutOfRange { root, vertex_count } => write!(
                f,
                "root {root} is outside the vertex range 0..{vertex_count}"
            ),
        }
    }
}

impl std::error::Error for BfsError {}

/// BFS layering rooted at one vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Levels {
    pub root: VertexId,
    /// Level per vertex; `None` when unreachable from the root.
    pub level: Vec<Option<u32>>,
    /// Tree edge through which each vertex was discovered (`NO_EDGE` for the
    /// root and unreachable vertices).
    pub parent_edge: Vec<EdgeId>,
    /// Vertices in discovery order.
    pub order: Vec<VertexId>,
    /// Number of vertices on each level.
    pub layer_sizes: Vec<usize>,
}

impl Levels {
    /// Number of non-empty levels.
    pub fn depth(&self) -> usize {
        self.layer_sizes.len()
    }

    pub fn reached(&self) -> usize {
        self.order.len()
    }

    /// Vertices on level `l`, in discovery order.
    pub fn layer(&self, l: u32) -> impl Iterator<Item = VertexId> + '_ {
        self.order
            .iter()
            .copied()
            .filter(move |&v| self.level[v as usize] == Some(l))
    }

    /// Tree edges from `v` up to the root; empty for the root or unreachable `v`.
    pub fn path_to_root(&self, store: &EdgeStore, v: VertexId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        let mut cur = v;
        while let Some(&e) = self.parent_edge.get(cur as usize) {
            if e == NO_EDGE {
                break;
            }
            path.push(e);
            cur = store.opposite_vertex(e, cur);
        }
        path
    }
}

/// One incident edge per vertex, `NO_EDGE` for isolated vertices.
///
/// The result covers at least `vertex_count` vertices.
pub fn incidence(store: &EdgeStore, vertex_count: usize) -> Vec<EdgeId> {
    let mut anchor = vec![NO_EDGE; vertex_count.max(store.vertex_count())];
    for (e, (&v1, &v2)) in store.vertex1().iter().zip(store.vertex2()).enumerate() {
        for v in [v1, v2] {
            if anchor[v as usize] == NO_EDGE {
                anchor[v as usize] = e as EdgeId;
            }
        }
    }
    anchor
}

/// Breadth-first levels from `root`, visiting neighbours in rotation order.
///
/// Vertices `0..vertex_count` are covered even when isolated; the range is
/// widened to every endpoint id the store holds.
pub fn bfs_levels(
    store: &EdgeStore,
    root: VertexId,
    vertex_count: usize,
) -> Result<Levels, BfsError> {
    let n = vertex_count.max(store.vertex_count());
    if root as usize >= n {
        return Err(BfsError::RootOutOfRange {
            root,
            vertex_count: n,
        });
    }
    let anchor = incidence(store, n);
    let mut level = vec![None; n];
    let mut parent_edge = vec![NO_EDGE; n];
    let mut order = Vec::with_capacity(n);
    let mut layer_sizes: Vec<usize> = Vec::new();

    let mut queue = FifoQueue::new();
    level[root as usize] = Some(0);
    queue.push_back((root, 0u32));

    while let Some((v, l)) = queue.pop_front() {
        order.push(v);
        if layer_sizes.len() <= l as usize {
            if let Some(&size) = layer_sizes.last() {
                trace!(level = l - 1, size, "layer complete");
            }
            layer_sizes.push(0);
        }
        layer_sizes[l as usize] += 1;

        let start = anchor[v as usize];
        for e in around(store, start, v) {
            let w = store.opposite_vertex(e, v);
            if level[w as usize].is_none() {
                level[w as usize] = Some(l + 1);
                parent_edge[w as usize] = e;
                queue.push_back((w, l + 1));
            }
        }
    }

    if let Some(&size) = layer_sizes.last() {
        trace!(level = layer_sizes.len() - 1, size, "layer complete");
    }
    debug!(
        root,
        reached = order.len(),
        depth = layer_sizes.len(),
        "bfs levels"
    );
    Ok(Levels {
        root,
        level,
        parent_edge,
        order,
        layer_sizes,
    })
}
