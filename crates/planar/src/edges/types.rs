//! Identifier aliases, the endpoint selector, and growth configuration.
//!
//! `EdgeView` and its `Display` define the one-line diagnostic format.

use std::fmt;

/// Vertex identifier as stored in an edge record.
pub type VertexId = u32;
/// Edge index, i.e. slot position in the store.
pub type EdgeId = u32;

/// Navigation link that has not been set by a collaborator yet.
pub const NO_EDGE: EdgeId = EdgeId::MAX;

/// Which stored endpoint a query vertex matched.
///
/// Selects the `vertex1`-anchored or the `vertex2`-anchored (next, previous)
/// pair of an edge record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    First,
    Second,
}

impl Endpoint {
    /// 0 for `First`, 1 for `Second`; the low bit of a dart index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Endpoint::First => 0,
            Endpoint::Second => 1,
        }
    }
}

/// Growth policy for `EdgeStore::push`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreCfg {
    /// Capacity allocated by `EdgeStore::new`.
    pub initial_capacity: usize,
    /// Multiplier applied to a full store's capacity.
    pub growth_factor: usize,
    /// Lower bound on the number of slots added per growth step.
    pub min_growth: usize,
}

impl Default for StoreCfg {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            growth_factor: 2,
            min_growth: 16,
        }
    }
}

impl StoreCfg {
    /// Capacity to grow a full store of `capacity` slots to.
    #[inline]
    pub fn grown_capacity(&self, capacity: usize) -> usize {
        let scaled = capacity.saturating_mul(self.growth_factor.max(1));
        scaled.max(capacity.saturating_add(self.min_growth.max(1)))
    }
}

/// Copy of one live edge record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeView {
    pub label: u32,
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub next1: EdgeId,
    pub prev1: EdgeId,
    pub next2: EdgeId,
    pub prev2: EdgeId,
}

/// Renders a navigation link, `-` when unset.
pub(crate) struct Link(pub EdgeId);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == NO_EDGE {
            f.write_str("-")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for EdgeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge(#{}, v1={}, v2={}, ccw1={}, cw1={}, ccw2={}, cw2={})",
            self.label,
            self.vertex1,
            self.vertex2,
            Link(self.next1),
            Link(self.prev1),
            Link(self.next2),
            Link(self.prev2)
        )
    }
}
