//! Arena-backed multigraph.
//!
//! Vertices and edges live in slabs and are addressed by stable ids
//! ([`VertexId`], [`EdgeId`]). A vertex keeps the ids of its incident edges
//! rather than references to them. The graph also keeps a dense list of live
//! edge ids, so counting and uniform random selection are O(1).
//!
//! Every live edge is listed in the adjacency list of each endpoint (once for
//! a self-loop), and every id found in an adjacency list names a live edge.
//! Edge insertion and removal go through `link`/`unlink`, which update both
//! views together. [`Graph::validate`] checks the invariant.
//!
//! ```rust
//! use mincut::graph::Graph;
//!
//! let mut g = Graph::undirected(false);
//! g.add_edge(1, 2, 0, true).unwrap();
//! g.add_edge(2, 3, 0, true).unwrap();
//! assert_eq!(g.vertex_count(), 3);
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.degree_of(&2), Some(2));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use rand::Rng;

use super::edge::{Edge, EdgeKind};
use crate::error::{Error, Result};

/// Stable handle to a vertex slot. Never reused within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// Stable handle to an edge slot. Never reused within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

/// A vertex: its value, the ids of its incident edges, and the original
/// values that have been contracted into it.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub(crate) value: T,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) members: Vec<T>,
    /// Slot in the graph's dense list of live vertices.
    pub(crate) position: usize,
}

impl<T> Vertex<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Incident edge ids in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Original values merged into this vertex, its own value first.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A multigraph whose vertices are identified by value.
///
/// All edges share the graph's [`EdgeKind`]. When `allow_parallel` is false,
/// inserting an edge equal to an existing one is rejected. Contraction may
/// still create parallel edges, because the policy only governs insertion.
#[derive(Debug)]
pub struct Graph<T> {
    pub(crate) vertices: Vec<Option<Vertex<T>>>,
    pub(crate) vertex_order: Vec<VertexId>,
    pub(crate) index: HashMap<T, VertexId>,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) edge_order: Vec<EdgeId>,
    pub(crate) kind: EdgeKind,
    pub(crate) allow_parallel: bool,
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::undirected(false)
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub fn new(kind: EdgeKind, allow_parallel: bool) -> Self {
        Self {
            vertices: Vec::new(),
            vertex_order: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_order: Vec::new(),
            kind,
            allow_parallel,
        }
    }

    pub fn undirected(allow_parallel: bool) -> Self {
        Self::new(EdgeKind::Undirected, allow_parallel)
    }

    pub fn directed(allow_parallel: bool) -> Self {
        Self::new(EdgeKind::Directed, allow_parallel)
    }

    /// Builds an undirected graph from a vertex set and `(v1, v2, weight)` triples.
    ///
    /// Every edge endpoint must be in `vertices`. Otherwise the whole build
    /// fails with [`Error::InvalidEndpoint`]. Repeated vertices are ignored.
    /// Repeated edges are skipped when `allow_parallel` is false.
    pub fn from_parts<V, E>(vertices: V, edges: E, allow_parallel: bool) -> Result<Self>
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = (T, T, i32)>,
    {
        let mut graph = Self::undirected(allow_parallel);
        for value in vertices {
            graph.add_vertex(value);
        }
        for (v1, v2, weight) in edges {
            match graph.add_edge(v1, v2, weight, false) {
                Ok(_) | Err(Error::DuplicateRejected(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(graph)
    }

    /// Inserts a vertex. Returns `false`, leaving the graph untouched, if the
    /// value is already present.
    pub fn add_vertex(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        self.insert_vertex(value);
        true
    }

    fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.index.insert(value.clone(), id);
        self.vertices.push(Some(Vertex {
            members: vec![value.clone()],
            value,
            edges: Vec::new(),
            position: self.vertex_order.len(),
        }));
        self.vertex_order.push(id);
        id
    }

    /// Inserts an edge of the graph's kind between the vertices valued `v1` and `v2`.
    ///
    /// If `create_if_missing` is set, absent endpoints are created. Otherwise
    /// they give [`Error::InvalidEndpoint`]. If parallel edges are disallowed
    /// and an equal edge exists, the result is [`Error::DuplicateRejected`].
    /// A failed insertion never mutates the graph.
    pub fn add_edge(&mut self, v1: T, v2: T, weight: i32, create_if_missing: bool) -> Result<EdgeId> {
        let init = self.index.get(&v1).copied();
        let end = self.index.get(&v2).copied();

        if !create_if_missing && (init.is_none() || end.is_none()) {
            return Err(Error::InvalidEndpoint(
                "edge endpoint is not a vertex of this graph".to_string(),
            ));
        }

        if let (Some(a), Some(b)) = (init, end) {
            if !self.allow_parallel && self.find_edge(a, b, weight).is_some() {
                return Err(Error::DuplicateRejected(format!(
                    "an equal edge of weight {} already exists",
                    weight
                )));
            }
        }

        let init = match init {
            Some(id) => id,
            None => self.insert_vertex(v1),
        };
        // v2 may equal v1, which has just been created
        let end = match end.or_else(|| self.index.get(&v2).copied()) {
            Some(id) => id,
            None => self.insert_vertex(v2),
        };
        Ok(self.link(init, end, weight))
    }

    /// Inserts a weight 0 edge between two existing vertices.
    pub fn add_arc(&mut self, v1: T, v2: T) -> Result<EdgeId> {
        self.add_edge(v1, v2, 0, false)
    }

    /// Finds an existing edge equal to `(init, end, weight)` under the graph's kind.
    fn find_edge(&self, init: VertexId, end: VertexId, weight: i32) -> Option<EdgeId> {
        let vertex = self.vertex(init)?;
        vertex.edges.iter().copied().find(|&id| {
            self.edge(id)
                .is_some_and(|e| e.matches(init, end, weight, self.kind))
        })
    }

    /// Creates an edge and registers it everywhere. No policy checks.
    pub(crate) fn link(&mut self, init: VertexId, end: VertexId, weight: i32) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let mut edge = Edge::new(init, end, weight, self.kind);
        edge.position = self.edge_order.len();
        self.edges.push(Some(edge));
        self.edge_order.push(id);

        if let Some(v) = self.vertex_mut(init) {
            v.edges.push(id);
        }
        if init != end {
            if let Some(v) = self.vertex_mut(end) {
                v.edges.push(id);
            }
        }
        id
    }

    /// Removes an edge from the slab, the live list and both endpoint lists.
    pub(crate) fn unlink(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.get_mut(id.0)?.take()?;

        self.edge_order.swap_remove(edge.position);
        if let Some(&moved) = self.edge_order.get(edge.position) {
            if let Some(e) = self.edges[moved.0].as_mut() {
                e.position = edge.position;
            }
        }

        for endpoint in [edge.init, edge.end] {
            if let Some(v) = self.vertex_mut(endpoint) {
                if let Some(i) = v.edges.iter().position(|&e| e == id) {
                    v.edges.remove(i);
                }
            }
        }
        Some(edge)
    }

    /// Removes a vertex from the arena, the live list and the value index.
    ///
    /// Incident edges are left alone. Callers detach them first.
    pub(crate) fn evict(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let vertex = self.vertices.get_mut(id.0)?.take()?;

        self.vertex_order.swap_remove(vertex.position);
        if let Some(&moved) = self.vertex_order.get(vertex.position) {
            if let Some(v) = self.vertices[moved.0].as_mut() {
                v.position = vertex.position;
            }
        }
        self.index.remove(&vertex.value);
        Some(vertex)
    }

    /// Degree of the vertex at position `index` (see [`Graph::vertices`]).
    pub fn degree(&self, index: usize) -> Result<usize> {
        let id = self
            .vertex_order
            .get(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.vertex_order.len(),
            })?;
        self.vertex(*id).map(Vertex::degree).ok_or_else(|| {
            Error::InvariantViolation(format!("position {} names an evicted vertex", index))
        })
    }

    pub fn degree_of(&self, value: &T) -> Option<usize> {
        self.vertex_id(value)
            .and_then(|id| self.vertex(id))
            .map(Vertex::degree)
    }

    /// Picks an edge uniformly at random. Parallel edges count separately.
    ///
    /// Returns `None` when the graph has no edges.
    pub fn random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<EdgeId> {
        if self.edge_order.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..self.edge_order.len());
        Some(self.edge_order[i])
    }

    /// Returns an independent copy with fresh, compacted ids.
    ///
    /// Values, weights, topology, merged members, kind and parallel-edge
    /// policy are preserved. Existing parallel edges are copied as they are.
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::new(self.kind, self.allow_parallel);
        copy.vertices.reserve(self.vertex_order.len());
        copy.edges.reserve(self.edge_order.len());

        let mut remap: Vec<Option<VertexId>> = vec![None; self.vertices.len()];
        for v in self.vertices() {
            let id = copy.insert_vertex(v.value.clone());
            if let Some(fresh) = copy.vertex_mut(id) {
                fresh.members = v.members.clone();
            }
            if let Some(old) = self.index.get(&v.value) {
                remap[old.0] = Some(id);
            }
        }
        for (_, e) in self.edges() {
            if let (Some(init), Some(end)) = (remap[e.init.0], remap[e.end.0]) {
                copy.link(init, end, e.weight);
            }
        }
        copy
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn allows_parallel_edges(&self) -> bool {
        self.allow_parallel
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(id.0).and_then(Option::as_mut)
    }

    /// The values at both ends of an edge, `init` first.
    pub fn endpoints(&self, id: EdgeId) -> Option<(&T, &T)> {
        let e = self.edge(id)?;
        Some((&self.vertex(e.init)?.value, &self.vertex(e.end)?.value))
    }

    pub fn vertex_id(&self, value: &T) -> Option<VertexId> {
        self.index.get(value).copied()
    }

    pub fn contains_vertex(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Live vertices in position order. Positions shift when a vertex is
    /// removed: the last vertex moves into the freed position.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertex_order.iter().filter_map(move |&id| self.vertex(id))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices().map(Vertex::value)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edge_order
            .iter()
            .filter_map(move |&id| self.edge(id).map(|e| (id, e)))
    }

    pub fn incident_edges(&self, value: &T) -> Option<&[EdgeId]> {
        self.vertex_id(value)
            .and_then(|id| self.vertex(id))
            .map(Vertex::edges)
    }

    pub fn has_self_loops(&self) -> bool {
        self.edges().any(|(_, e)| e.is_self_loop())
    }

    /// Compares vertex values and `(endpoint values, weight)` triples as
    /// multisets, ignoring ids and insertion order.
    pub fn same_shape(&self, other: &Self) -> bool {
        if self.kind != other.kind
            || self.vertex_count() != other.vertex_count()
            || self.edge_count() != other.edge_count()
        {
            return false;
        }
        if !self.values().all(|v| other.contains_vertex(v)) {
            return false;
        }
        self.edge_multiset() == other.edge_multiset()
    }

    fn edge_multiset(&self) -> HashMap<(&T, &T, i32), usize> {
        let mut counts = HashMap::new();
        for (id, e) in self.edges() {
            if let Some((a, b)) = self.endpoints(id) {
                *counts.entry((a, b, e.weight)).or_insert(0) += 1;
                if self.kind == EdgeKind::Undirected {
                    *counts.entry((b, a, e.weight)).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Checks that the adjacency lists and the global edge list agree.
    pub fn validate(&self) -> Result<()> {
        let broken = |msg: String| Err(Error::InvariantViolation(msg));

        if self.index.len() != self.vertex_order.len() {
            return broken(format!(
                "index holds {} values for {} vertices",
                self.index.len(),
                self.vertex_order.len()
            ));
        }
        for (pos, &id) in self.vertex_order.iter().enumerate() {
            let Some(v) = self.vertex(id) else {
                return broken(format!("live vertex {:?} has no slot", id));
            };
            if v.position != pos || self.index.get(&v.value) != Some(&id) {
                return broken(format!("vertex {:?} is mis-indexed", id));
            }
            for &e in &v.edges {
                match self.edge(e) {
                    Some(edge) if edge.init == id || edge.end == id => {}
                    Some(_) => return broken(format!("{:?} lists {:?} it is not part of", id, e)),
                    None => return broken(format!("{:?} lists removed edge {:?}", id, e)),
                }
            }
        }

        let live = self.edges.iter().filter(|slot| slot.is_some()).count();
        if live != self.edge_order.len() {
            return broken(format!(
                "{} edge slots live but {} edges listed",
                live,
                self.edge_order.len()
            ));
        }
        for (pos, &id) in self.edge_order.iter().enumerate() {
            let Some(e) = self.edge(id) else {
                return broken(format!("listed edge {:?} has no slot", id));
            };
            if e.position != pos {
                return broken(format!("edge {:?} is mis-indexed", id));
            }
            for endpoint in [e.init, e.end] {
                let Some(v) = self.vertex(endpoint) else {
                    return broken(format!("edge {:?} touches removed vertex {:?}", id, endpoint));
                };
                let seen = v.edges.iter().filter(|&&x| x == id).count();
                if seen != 1 {
                    return broken(format!("{:?} lists edge {:?} {} times", endpoint, id, seen));
                }
            }
        }
        Ok(())
    }
}

/// Adjacency listing: one line per vertex with each neighbour's value and the
/// edge weight in brackets.
impl<T: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for v in self.vertices() {
            write!(f, "\n\t{}:\t[ ", v.value)?;
            for &id in &v.edges {
                let Some(e) = self.edge(id) else { continue };
                let Some(far) = self.vertex(e.end) else { continue };
                let far = if far.value == v.value {
                    match self.vertex(e.init) {
                        Some(near) => near,
                        None => continue,
                    }
                } else {
                    far
                };
                write!(f, "{}[{}] ", far.value, e.weight)?;
            }
            write!(f, "]")?;
        }
        write!(f, "\n]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn triangle() -> Graph<u32> {
        let mut g = Graph::undirected(false);
        g.add_edge(1, 2, 0, true).unwrap();
        g.add_edge(2, 3, 0, true).unwrap();
        g.add_edge(3, 1, 0, true).unwrap();
        g
    }

    #[test]
    fn test_add_vertex_rejects_duplicates() {
        let mut g: Graph<&str> = Graph::default();
        assert!(g.add_vertex("a"));
        assert!(g.add_vertex("b"));
        assert!(!g.add_vertex("a"));
        assert_eq!(g.vertex_count(), 2);
        g.validate().unwrap();
    }

    #[test]
    fn test_add_edge_without_create_needs_both_endpoints() {
        let mut g = Graph::undirected(false);
        g.add_vertex(1);
        let result = g.add_edge(1, 2, 0, false);
        assert!(matches!(result, Err(Error::InvalidEndpoint(_))));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree_of(&1), Some(0));
    }

    #[test]
    fn test_add_edge_creates_missing_endpoints() {
        let mut g = Graph::undirected(false);
        let id = g.add_edge(7, 9, 4, true).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.endpoints(id), Some((&7, &9)));
        assert_eq!(g.edge(id).map(Edge::weight), Some(4));
        g.validate().unwrap();
    }

    #[test]
    fn test_parallel_edges_rejected_when_disallowed() {
        let mut g = Graph::undirected(false);
        g.add_edge(1, 2, 0, true).unwrap();
        assert!(matches!(
            g.add_edge(1, 2, 0, true),
            Err(Error::DuplicateRejected(_))
        ));
        assert!(matches!(
            g.add_edge(2, 1, 0, false),
            Err(Error::DuplicateRejected(_))
        ));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree_of(&1), Some(1));

        // a different weight is a different edge
        g.add_edge(1, 2, 5, false).unwrap();
        assert_eq!(g.edge_count(), 2);
        g.validate().unwrap();
    }

    #[test]
    fn test_directed_reverse_is_not_a_duplicate() {
        let mut g = Graph::directed(false);
        g.add_edge('a', 'b', 0, true).unwrap();
        g.add_edge('b', 'a', 0, false).unwrap();
        assert!(g.add_edge('a', 'b', 0, false).is_err());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_parallel_edges_kept_when_allowed() {
        let mut g = Graph::undirected(true);
        g.add_edge(1, 2, 0, true).unwrap();
        g.add_edge(1, 2, 0, true).unwrap();
        g.add_edge(2, 1, 0, true).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree_of(&1), Some(3));
        assert_eq!(g.degree_of(&2), Some(3));
        g.validate().unwrap();
    }

    #[test]
    fn test_self_loop_is_listed_once() {
        let mut g = Graph::undirected(false);
        let id = g.add_edge(5, 5, 0, true).unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.incident_edges(&5), Some(&[id][..]));
        assert!(g.has_self_loops());
        g.validate().unwrap();
    }

    #[test]
    fn test_degree_by_position() {
        let g = triangle();
        for i in 0..3 {
            assert_eq!(g.degree(i).unwrap(), 2);
        }
        assert!(matches!(
            g.degree(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_random_edge_on_empty_graph() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut g: Graph<u32> = Graph::default();
        assert_eq!(g.random_edge(&mut rng), None);
        g.add_vertex(1);
        g.add_vertex(2);
        assert_eq!(g.random_edge(&mut rng), None);
    }

    #[test]
    fn test_random_edge_counts_parallels_separately() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut g = Graph::undirected(true);
        g.add_edge(1, 2, 0, true).unwrap();
        g.add_edge(1, 2, 0, true).unwrap();
        g.add_edge(2, 3, 0, true).unwrap();

        let draws = 6000;
        let mut between_1_and_2 = 0;
        for _ in 0..draws {
            let id = g.random_edge(&mut rng).unwrap();
            if g.endpoints(id) == Some((&1, &2)) {
                between_1_and_2 += 1;
            }
        }
        let share = between_1_and_2 as f64 / draws as f64;
        assert!(share > 0.6 && share < 0.73, "share was {}", share);
    }

    #[test]
    fn test_random_edge_is_reproducible() {
        let g = triangle();
        let picks = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..20)
                .map(|_| g.random_edge(&mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(9), picks(9));
    }

    #[test]
    fn test_deep_copy_has_same_shape() {
        let mut g = triangle();
        g.add_edge(3, 4, 2, true).unwrap();
        let copy = g.deep_copy();
        assert!(copy.same_shape(&g));
        assert_eq!(copy.allows_parallel_edges(), g.allows_parallel_edges());
        assert_eq!(copy.kind(), g.kind());
        copy.validate().unwrap();

        let twice = copy.deep_copy();
        assert!(twice.same_shape(&copy));
        assert!(twice.same_shape(&g));
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let g = triangle();
        let mut copy = g.deep_copy();
        copy.add_edge(3, 4, 0, true).unwrap();
        copy.add_vertex(10);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.contains_vertex(&4));
        assert!(!copy.same_shape(&g));
    }

    #[test]
    fn test_same_shape_detects_weight_and_direction() {
        let mut a = Graph::undirected(false);
        a.add_edge(1, 2, 1, true).unwrap();
        let mut b = Graph::undirected(false);
        b.add_edge(2, 1, 1, true).unwrap();
        assert!(a.same_shape(&b));

        let mut c = Graph::undirected(false);
        c.add_edge(1, 2, 2, true).unwrap();
        assert!(!a.same_shape(&c));

        let mut d = Graph::directed(false);
        d.add_edge(1, 2, 1, true).unwrap();
        let mut e = Graph::directed(false);
        e.add_edge(2, 1, 1, true).unwrap();
        assert!(!d.same_shape(&e));
    }

    #[test]
    fn test_from_parts() {
        let g = Graph::from_parts(
            vec![1, 2, 3, 3],
            vec![(1, 2, 0), (2, 3, 0), (3, 2, 0)],
            false,
        )
        .unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);

        let bad = Graph::from_parts(vec![1, 2], vec![(1, 2, 0), (2, 9, 0)], false);
        assert!(matches!(bad, Err(Error::InvalidEndpoint(_))));
    }

    #[test]
    fn test_unlink_keeps_views_consistent() {
        let mut g = Graph::undirected(true);
        let ids: Vec<EdgeId> = (0..6)
            .map(|i| g.add_edge(i % 3, (i + 1) % 4, 0, true).unwrap())
            .collect();
        g.unlink(ids[0]).unwrap();
        g.unlink(ids[4]).unwrap();
        assert!(g.unlink(ids[0]).is_none());
        assert_eq!(g.edge_count(), 4);
        g.validate().unwrap();
    }

    #[test]
    fn test_display_lists_neighbours() {
        let mut g = Graph::undirected(false);
        g.add_edge(1, 2, 3, true).unwrap();
        g.add_vertex(4);
        assert_eq!(g.to_string(), "[\n\t1:\t[ 2[3] ]\n\t2:\t[ 1[3] ]\n\t4:\t[ ]\n]");
    }
}
