//! Rotation-system helpers on top of `EdgeStore`.
//!
//! Purpose
//! - Thread a vertex's incident edges into one cycle (`thread_rotation`),
//!   load a whole rotation system from per-vertex neighbour lists
//!   (`from_rotations`), and audit the link contract (`validate`).
//! - Walk rotations (`around`) and faces (`face`, `count_faces`).
//!
//! Face rule
//! - A dart is an edge plus its tail vertex. Arriving at `w` through `e`, the
//!   face walk leaves through `next_edge(e, w)`. Any consistent choice traces
//!   the faces of the embedding; for a connected planar rotation system
//!   `V - E + F = 2`.

use std::collections::HashMap;
use std::fmt;

use crate::edges::{EdgeId, EdgeStore, EdgeStoreError, StoreCfg, VertexId, NO_EDGE};

/// Violations of the rotation contract found by `validate` or `from_rotations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// A link around `vertex` was never set.
    Unlinked { edge: EdgeId, vertex: VertexId },
    /// A link points past the live edges.
    DanglingLink {
        edge: EdgeId,
        vertex: VertexId,
        link: EdgeId,
    },
    /// A link around `vertex` targets an edge not incident to `vertex`.
    NotIncident {
        edge: EdgeId,
        vertex: VertexId,
        link: EdgeId,
    },
    /// `next` and `previous` around `vertex` are not inverse at `edge`.
    BrokenInverse { edge: EdgeId, vertex: VertexId },
    /// The rotation around `vertex` does not cover all `degree` incident edges.
    SplitRotation {
        vertex: VertexId,
        reached: usize,
        degree: usize,
    },
    /// A neighbour list names a vertex outside the rotation system.
    UnknownVertex { vertex: VertexId, neighbor: VertexId },
    /// A neighbour list names its own vertex.
    SelfLoop { vertex: VertexId },
    /// A neighbour appears twice in one list.
    DuplicateNeighbor { vertex: VertexId, neighbor: VertexId },
    /// `neighbor` is listed by `vertex` but not the other way round.
    Asymmetric { vertex: VertexId, neighbor: VertexId },
    Store(EdgeStoreError),
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::Unlinked { edge, vertex } => {
                write!(f, "edge {edge} has no rotation links around vertex {vertex}")
            }
            RotationError::DanglingLink { edge, vertex, link } => write!(
                f,
                "edge {edge} links to non-live edge {link} around vertex {vertex}"
            ),
            RotationError::NotIncident { edge, vertex, link } => write!(
                f,
                "edge {edge} links to edge {link} which is not incident to vertex {vertex}"
            ),
            RotationError::BrokenInverse { edge, vertex } => write!(
                f,
                "next/previous links of edge {edge} around vertex {vertex} are not inverse"
            ),
            RotationError::SplitRotation {
                vertex,
                reached,
                degree,
            } => write!(
                f,
                "rotation around vertex {vertex} reaches {reached} of {degree} incident edges"
            ),
            RotationError::UnknownVertex { vertex, neighbor } => {
                write!(f, "vertex {vertex} lists unknown neighbour {neighbor}")
            }
            RotationError::SelfLoop { vertex } => write!(f, "vertex {vertex} lists itself"),
            RotationError::DuplicateNeighbor { vertex, neighbor } => {
                write!(f, "vertex {vertex} lists neighbour {neighbor} twice")
            }
            RotationError::Asymmetric { vertex, neighbor } => write!(
                f,
                "vertex {vertex} lists {neighbor} but {neighbor} does not list {vertex}"
            ),
            RotationError::Store(err) => write!(f, "edge store: {err}"),
        }
    }
}

impl std::error::Error for RotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RotationError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EdgeStoreError> for RotationError {
    fn from(err: EdgeStoreError) -> Self {
        RotationError::Store(err)
    }
}

/// Link `edges` into one cycle around `vertex`, in the given order.
///
/// A single edge becomes its own next and previous; an empty slice is a no-op.
/// Nothing is written unless every edge is live and incident to `vertex`.
pub fn thread_rotation(
    store: &mut EdgeStore,
    vertex: VertexId,
    edges: &[EdgeId],
) -> Result<(), EdgeStoreError> {
    for &e in edges {
        store.endpoint(e, vertex)?;
    }
    for (k, &e) in edges.iter().enumerate() {
        let succ = edges[(k + 1) % edges.len()];
        store.set_next_edge(e, vertex, succ)?;
    }
    Ok(())
}

/// Build a store from per-vertex neighbour lists in rotation order.
///
/// `rotations[v]` lists the neighbours of `v` in the cyclic order they occur
/// around `v`. One edge is created per unordered pair, in order of first
/// appearance from the smaller endpoint.
pub fn from_rotations(
    rotations: &[Vec<VertexId>],
    cfg: StoreCfg,
) -> Result<EdgeStore, RotationError> {
    let n = rotations.len();
    let mut store = EdgeStore::new(cfg);
    let mut by_pair: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();

    for (u, neighbors) in rotations.iter().enumerate() {
        let u = u as VertexId;
        for &w in neighbors {
            if w as usize >= n {
                return Err(RotationError::UnknownVertex {
                    vertex: u,
                    neighbor: w,
                });
            }
            if w == u {
                return Err(RotationError::SelfLoop { vertex: u });
            }
            if u < w {
                if by_pair.contains_key(&(u, w)) {
                    return Err(RotationError::DuplicateNeighbor {
                        vertex: u,
                        neighbor: w,
                    });
                }
                let e = store.push(u, w);
                by_pair.insert((u, w), e);
            }
        }
    }

    let mut ring = Vec::new();
    for (u, neighbors) in rotations.iter().enumerate() {
        let u = u as VertexId;
        ring.clear();
        for &w in neighbors {
            let key = (u.min(w), u.max(w));
            let e = *by_pair.get(&key).ok_or(RotationError::Asymmetric {
                vertex: u,
                neighbor: w,
            })?;
            if ring.contains(&e) {
                return Err(RotationError::DuplicateNeighbor {
                    vertex: u,
                    neighbor: w,
                });
            }
            ring.push(e);
        }
        thread_rotation(&mut store, u, &ring)?;
    }

    for e in 0..store.size() as EdgeId {
        let v2 = store.vertex2()[e as usize];
        if !store.is_linked(e, v2) {
            return Err(RotationError::Asymmetric {
                vertex: store.vertex1()[e as usize],
                neighbor: v2,
            });
        }
    }
    Ok(store)
}

/// Edges around `vertex`, starting at `start` and following `next_edge`.
pub fn around(store: &EdgeStore, start: EdgeId, vertex: VertexId) -> Rotation<'_> {
    Rotation {
        store,
        vertex,
        start,
        current: (start != NO_EDGE).then_some(start),
        budget: store.size(),
    }
}

/// Iterator returned by `around`.
///
/// Stops on returning to the start edge, on an unset link, or after
/// `size` steps when links do not close a cycle through the start.
pub struct Rotation<'a> {
    store: &'a EdgeStore,
    vertex: VertexId,
    start: EdgeId,
    current: Option<EdgeId>,
    budget: usize,
}

impl Iterator for Rotation<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let cur = self.current?;
        if self.budget == 0 {
            self.current = None;
            return None;
        }
        self.budget -= 1;
        let succ = self.store.next_edge(cur, self.vertex);
        self.current = (succ != self.start && succ != NO_EDGE).then_some(succ);
        Some(cur)
    }
}

/// Darts `(edge, tail)` of the face entered by leaving `tail` through `edge`.
pub fn face(store: &EdgeStore, edge: EdgeId, tail: VertexId) -> FaceWalk<'_> {
    FaceWalk {
        store,
        start: (edge, tail),
        current: Some((edge, tail)),
        budget: 2 * store.size(),
    }
}

/// Iterator returned by `face`.
pub struct FaceWalk<'a> {
    store: &'a EdgeStore,
    start: (EdgeId, VertexId),
    current: Option<(EdgeId, VertexId)>,
    budget: usize,
}

impl Iterator for FaceWalk<'_> {
    type Item = (EdgeId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        let (e, tail) = self.current?;
        if self.budget == 0 {
            self.current = None;
            return None;
        }
        self.budget -= 1;
        let head = self.store.opposite_vertex(e, tail);
        let succ = self.store.next_edge(e, head);
        self.current = (succ != NO_EDGE && (succ, head) != self.start).then_some((succ, head));
        Some((e, tail))
    }
}

/// Number of faces traced by the face rule. Assumes no self-loops.
pub fn count_faces(store: &EdgeStore) -> usize {
    let mut seen = vec![false; 2 * store.size()];
    let mut faces = 0;
    for e in 0..store.size() as EdgeId {
        for tail in [store.vertex1()[e as usize], store.vertex2()[e as usize]] {
            if seen[store.dart(e, tail)] {
                continue;
            }
            faces += 1;
            for (edge, t) in face(store, e, tail) {
                seen[store.dart(edge, t)] = true;
            }
        }
    }
    faces
}

/// Check that the links of every live edge form one valid rotation per vertex.
pub fn validate(store: &EdgeStore) -> Result<(), RotationError> {
    let size = store.size();
    let mut degree = vec![0usize; store.vertex_count()];
    let mut anchor = vec![NO_EDGE; store.vertex_count()];

    for e in 0..size as EdgeId {
        let view = store.edge(e)?;
        let sides = if view.vertex1 == view.vertex2 { 1 } else { 2 };
        for &v in &[view.vertex1, view.vertex2][..sides] {
            degree[v as usize] += 1;
            if anchor[v as usize] == NO_EDGE {
                anchor[v as usize] = e;
            }
            check_links(store, e, v)?;
        }
    }

    for (v, &start) in anchor.iter().enumerate() {
        if start == NO_EDGE {
            continue;
        }
        let reached = around(store, start, v as VertexId).count();
        if reached != degree[v] {
            return Err(RotationError::SplitRotation {
                vertex: v as VertexId,
                reached,
                degree: degree[v],
            });
        }
    }
    Ok(())
}

fn check_links(store: &EdgeStore, e: EdgeId, v: VertexId) -> Result<(), RotationError> {
    let next = store.next_edge(e, v);
    let prev = store.previous_edge(e, v);
    if next == NO_EDGE || prev == NO_EDGE {
        return Err(RotationError::Unlinked { edge: e, vertex: v });
    }
    for link in [next, prev] {
        match store.endpoint(link, v) {
            Ok(_) => {}
            Err(EdgeStoreError::EdgeOutOfRange { .. }) => {
                return Err(RotationError::DanglingLink {
                    edge: e,
                    vertex: v,
                    link,
                })
            }
            Err(_) => {
                return Err(RotationError::NotIncident {
                    edge: e,
                    vertex: v,
                    link,
                })
            }
        }
    }
    if store.previous_edge(next, v) != e || store.next_edge(prev, v) != e {
        return Err(RotationError::BrokenInverse { edge: e, vertex: v });
    }
    Ok(())
}
