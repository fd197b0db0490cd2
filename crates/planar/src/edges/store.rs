//! Struct-of-arrays edge store.

use std::fmt;

use tracing::debug;

use super::error::EdgeStoreError;
use super::types::{EdgeId, EdgeView, Endpoint, StoreCfg, VertexId, NO_EDGE};

/// Flat, preallocated edge columns plus rotation links.
///
/// Every column has length `capacity`. Slots `[0, size)` are live; the
/// remaining slots are reserved and hold defaults (`0` endpoints, `NO_EDGE`
/// links, identity labels).
#[derive(Clone, Debug)]
pub struct EdgeStore {
    vertex1: Vec<VertexId>,
    vertex2: Vec<VertexId>,
    label: Vec<u32>,
    next1: Vec<EdgeId>,
    prev1: Vec<EdgeId>,
    next2: Vec<EdgeId>,
    prev2: Vec<EdgeId>,
    size: usize,
    cfg: StoreCfg,
}

impl Default for EdgeStore {
    fn default() -> Self {
        Self::new(StoreCfg::default())
    }
}

#[inline]
fn to_id(index: usize) -> EdgeId {
    debug_assert!(index < NO_EDGE as usize, "edge index {index} overflows EdgeId");
    index as EdgeId
}

#[inline]
fn rebase(link: EdgeId, offset: EdgeId) -> EdgeId {
    if link == NO_EDGE {
        NO_EDGE
    } else {
        link + offset
    }
}

impl EdgeStore {
    /// Store with `cfg.initial_capacity` reserved slots.
    pub fn new(cfg: StoreCfg) -> Self {
        let mut store = Self {
            vertex1: Vec::new(),
            vertex2: Vec::new(),
            label: Vec::new(),
            next1: Vec::new(),
            prev1: Vec::new(),
            next2: Vec::new(),
            prev2: Vec::new(),
            size: 0,
            cfg,
        };
        store.reallocate(cfg.initial_capacity);
        store
    }

    /// Store with exactly `capacity` reserved slots and the default growth policy.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(StoreCfg {
            initial_capacity: capacity,
            ..StoreCfg::default()
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertex1.len()
    }

    /// First endpoints of the live edges.
    #[inline]
    pub fn vertex1(&self) -> &[VertexId] {
        &self.vertex1[..self.size]
    }

    /// Second endpoints of the live edges.
    #[inline]
    pub fn vertex2(&self) -> &[VertexId] {
        &self.vertex2[..self.size]
    }

    /// Bookkeeping labels of the live edges (not slot positions after merges).
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.label[..self.size]
    }

    /// One more than the largest endpoint id, 0 for an empty store.
    pub fn vertex_count(&self) -> usize {
        self.vertex1()
            .iter()
            .chain(self.vertex2())
            .max()
            .map_or(0, |&v| v as usize + 1)
    }

    /// Append edge `(v1, v2)` at slot `size` and return its index.
    ///
    /// Links of the new edge are `NO_EDGE` until set by the caller.
    pub fn append(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId, EdgeStoreError> {
        if self.size == self.capacity() {
            return Err(EdgeStoreError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        Ok(self.write_slot(v1, v2))
    }

    /// Append edge `(v1, v2)`, growing per `StoreCfg` when the store is full.
    pub fn push(&mut self, v1: VertexId, v2: VertexId) -> EdgeId {
        if self.size == self.capacity() {
            let grown = self.cfg.grown_capacity(self.capacity());
            debug!(from = self.capacity(), to = grown, "edge store full, growing");
            self.reallocate(grown);
        }
        self.write_slot(v1, v2)
    }

    fn write_slot(&mut self, v1: VertexId, v2: VertexId) -> EdgeId {
        let i = self.size;
        self.vertex1[i] = v1;
        self.vertex2[i] = v2;
        self.next1[i] = NO_EDGE;
        self.prev1[i] = NO_EDGE;
        self.next2[i] = NO_EDGE;
        self.prev2[i] = NO_EDGE;
        self.size += 1;
        to_id(i)
    }

    /// Append all live edges of `other` after the live edges of `self`.
    ///
    /// With `a = self.size()`: labels become `other.label + a` and every set
    /// link of `other` is shifted by `a`, so rotations threaded inside
    /// `other` stay valid in the merged index space. Capacity grows to exactly
    /// `a + other.size()` when it was smaller.
    pub fn extend(&mut self, other: &EdgeStore) {
        let a = self.size;
        let b = other.size;
        let merged = a + b;
        if merged > self.capacity() {
            self.reallocate(merged);
        }
        let offset = to_id(a);

        self.vertex1[a..merged].copy_from_slice(other.vertex1());
        self.vertex2[a..merged].copy_from_slice(other.vertex2());
        for (dst, &src) in self.label[a..merged].iter_mut().zip(other.labels()) {
            *dst = src + offset;
        }
        let columns = [
            (&mut self.next1, &other.next1),
            (&mut self.prev1, &other.prev1),
            (&mut self.next2, &other.next2),
            (&mut self.prev2, &other.prev2),
        ];
        for (dst, src) in columns {
            for (d, &s) in dst[a..merged].iter_mut().zip(&src[..b]) {
                *d = rebase(s, offset);
            }
        }
        self.size = merged;
        debug!(left = a, right = b, capacity = self.capacity(), "edge stores merged");
    }

    /// Reallocate to `capacity` slots, keeping every live edge.
    ///
    /// Endpoints, links, and labels of live edges are preserved; reserved
    /// slots are reset to defaults with identity labels. A `capacity` below
    /// the current capacity but not below `size` trims the reserved tail.
    pub fn increase_capacity(&mut self, capacity: usize) -> Result<(), EdgeStoreError> {
        if capacity < self.size {
            return Err(EdgeStoreError::CapacityUnderflow {
                requested: capacity,
                size: self.size,
            });
        }
        debug!(from = self.capacity(), to = capacity, size = self.size, "edge store resized");
        self.reallocate(capacity);
        Ok(())
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size);
        let live = self.size;
        for column in [&mut self.vertex1, &mut self.vertex2] {
            column.truncate(live);
            column.resize(capacity, 0);
        }
        for column in [
            &mut self.next1,
            &mut self.prev1,
            &mut self.next2,
            &mut self.prev2,
        ] {
            column.truncate(live);
            column.resize(capacity, NO_EDGE);
        }
        self.label.truncate(live);
        self.label.extend((live..capacity).map(|i| i as u32));
    }

    #[inline]
    fn live(&self, edge: EdgeId) -> Result<usize, EdgeStoreError> {
        let i = edge as usize;
        if i < self.size {
            Ok(i)
        } else {
            Err(EdgeStoreError::EdgeOutOfRange {
                edge,
                size: self.size,
            })
        }
    }

    /// Checked selector: which endpoint of `edge` is `vertex`.
    ///
    /// A self-loop always resolves to `First`.
    pub fn endpoint(&self, edge: EdgeId, vertex: VertexId) -> Result<Endpoint, EdgeStoreError> {
        let i = self.live(edge)?;
        if self.vertex1[i] == vertex {
            Ok(Endpoint::First)
        } else if self.vertex2[i] == vertex {
            Ok(Endpoint::Second)
        } else {
            Err(EdgeStoreError::InvalidVertex { edge, vertex })
        }
    }

    #[inline]
    fn side(&self, i: usize, vertex: VertexId) -> Endpoint {
        debug_assert!(i < self.size, "edge {i} is not live (size {})", self.size);
        if self.vertex1[i] == vertex {
            Endpoint::First
        } else {
            debug_assert!(
                self.vertex2[i] == vertex,
                "vertex {vertex} is not an endpoint of edge {i}"
            );
            Endpoint::Second
        }
    }

    /// Dense index of the dart leaving `vertex` through `edge`, in `0..2 * size`.
    #[inline]
    pub(crate) fn dart(&self, edge: EdgeId, vertex: VertexId) -> usize {
        let i = edge as usize;
        2 * i + self.side(i, vertex).index()
    }

    /// The endpoint of `edge` that is not `vertex`.
    #[inline]
    pub fn opposite_vertex(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        let i = edge as usize;
        match self.side(i, vertex) {
            Endpoint::First => self.vertex2[i],
            Endpoint::Second => self.vertex1[i],
        }
    }

    /// Edge after `edge` in the rotation around `vertex`.
    #[inline]
    pub fn next_edge(&self, edge: EdgeId, vertex: VertexId) -> EdgeId {
        let i = edge as usize;
        match self.side(i, vertex) {
            Endpoint::First => self.next1[i],
            Endpoint::Second => self.next2[i],
        }
    }

    /// Edge before `edge` in the rotation around `vertex`.
    #[inline]
    pub fn previous_edge(&self, edge: EdgeId, vertex: VertexId) -> EdgeId {
        let i = edge as usize;
        match self.side(i, vertex) {
            Endpoint::First => self.prev1[i],
            Endpoint::Second => self.prev2[i],
        }
    }

    /// Both links around `vertex` have been set.
    pub fn is_linked(&self, edge: EdgeId, vertex: VertexId) -> bool {
        self.next_edge(edge, vertex) != NO_EDGE && self.previous_edge(edge, vertex) != NO_EDGE
    }

    /// Around `vertex`: next of `edge` becomes `other`, previous of `other` becomes `edge`.
    pub fn set_next_edge(
        &mut self,
        edge: EdgeId,
        vertex: VertexId,
        other: EdgeId,
    ) -> Result<(), EdgeStoreError> {
        let at_edge = self.endpoint(edge, vertex)?;
        let at_other = self.endpoint(other, vertex)?;
        self.write_next(edge as usize, at_edge, other);
        self.write_previous(other as usize, at_other, edge);
        Ok(())
    }

    /// Around `vertex`: previous of `edge` becomes `other`, next of `other` becomes `edge`.
    pub fn set_previous_edge(
        &mut self,
        edge: EdgeId,
        vertex: VertexId,
        other: EdgeId,
    ) -> Result<(), EdgeStoreError> {
        let at_edge = self.endpoint(edge, vertex)?;
        let at_other = self.endpoint(other, vertex)?;
        self.write_previous(edge as usize, at_edge, other);
        self.write_next(other as usize, at_other, edge);
        Ok(())
    }

    #[inline]
    fn write_next(&mut self, i: usize, side: Endpoint, link: EdgeId) {
        match side {
            Endpoint::First => self.next1[i] = link,
            Endpoint::Second => self.next2[i] = link,
        }
    }

    #[inline]
    fn write_previous(&mut self, i: usize, side: Endpoint, link: EdgeId) {
        match side {
            Endpoint::First => self.prev1[i] = link,
            Endpoint::Second => self.prev2[i] = link,
        }
    }

    /// Copy of the record at `edge`.
    pub fn edge(&self, edge: EdgeId) -> Result<EdgeView, EdgeStoreError> {
        let i = self.live(edge)?;
        Ok(self.view(i))
    }

    fn view(&self, i: usize) -> EdgeView {
        EdgeView {
            label: self.label[i],
            vertex1: self.vertex1[i],
            vertex2: self.vertex2[i],
            next1: self.next1[i],
            prev1: self.prev1[i],
            next2: self.next2[i],
            prev2: self.prev2[i],
        }
    }

    /// Live records in slot order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        (0..self.size).map(move |i| self.view(i))
    }

    /// Diagnostic dump, one line per live edge.
    pub fn string_lines(&self) -> Vec<String> {
        self.edges().map(|e| e.to_string()).collect()
    }
}

impl fmt::Display for EdgeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EdgeStore(size={}, capacity={})", self.size, self.capacity())?;
        for e in self.edges() {
            writeln!(f, "    {e}")?;
        }
        Ok(())
    }
}
