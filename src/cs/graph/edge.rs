use std::cmp::Ordering;

use super::multigraph::VertexId;

/// Whether an edge is read as an ordered or an unordered pair of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeKind {
    Directed,
    #[default]
    Undirected,
}

/// An edge between two vertices of the same [`Graph`](super::Graph), carrying an integer weight.
///
/// For a directed edge `init` is the tail and `end` the head. For an undirected
/// edge the two are interchangeable.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) init: VertexId,
    pub(crate) end: VertexId,
    pub(crate) weight: i32,
    pub(crate) kind: EdgeKind,
    /// Slot in the graph's dense list of live edges.
    pub(crate) position: usize,
}

impl Edge {
    pub(crate) fn new(init: VertexId, end: VertexId, weight: i32, kind: EdgeKind) -> Self {
        Self {
            init,
            end,
            weight,
            kind,
            position: 0,
        }
    }

    pub fn init(&self) -> VertexId {
        self.init
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_self_loop(&self) -> bool {
        self.init == self.end
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if self.init == v {
            Some(self.end)
        } else if self.end == v {
            Some(self.init)
        } else {
            None
        }
    }

    /// Orders two edges by weight alone.
    ///
    /// This is deliberately not a `PartialOrd` impl: two edges of equal weight
    /// are usually not equal edges.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// Structural equality against an edge that has not been inserted yet.
    pub(crate) fn matches(&self, init: VertexId, end: VertexId, weight: i32, kind: EdgeKind) -> bool {
        if self.kind != kind || self.weight != weight {
            return false;
        }
        let same_order = self.init == init && self.end == end;
        match kind {
            EdgeKind::Directed => same_order,
            EdgeKind::Undirected => same_order || (self.init == end && self.end == init),
        }
    }
}

/// Two edges are equal when they have the same kind and weight and join the
/// same endpoints, in either order for undirected edges.
///
/// Endpoints are compared by id, which within one graph is the same as
/// comparing vertex values.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.init, other.end, other.weight, other.kind)
    }
}

impl Eq for Edge {}
