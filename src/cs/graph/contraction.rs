use std::hash::Hash;

use log::trace;

use super::multigraph::{EdgeId, Graph, VertexId};
use crate::error::{Error, Result};

/// What a call to [`Graph::contract`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contraction {
    /// `removed` was merged into `survivor`. `discarded_edges` counts the
    /// contracted edge plus every edge the merge turned into a self-loop.
    Merged {
        survivor: VertexId,
        removed: VertexId,
        discarded_edges: usize,
    },
    /// The chosen edge was a self-loop. It was removed, and no vertex was merged.
    SelfLoopDiscarded,
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Contracts `edge`, merging its `end` vertex into its `init` vertex.
    ///
    /// Every other edge of `end` is rewired to `init`, except those that would
    /// become self-loops, which are dropped. Parallel edges are kept, whatever
    /// the graph's parallel-edge policy. `end` is then removed, and its merged
    /// members pass to the survivor.
    ///
    /// ```rust
    /// use mincut::graph::{Contraction, Graph};
    ///
    /// let mut g = Graph::undirected(false);
    /// let ab = g.add_edge('a', 'b', 0, true).unwrap();
    /// g.add_edge('b', 'c', 0, true).unwrap();
    /// g.add_edge('c', 'a', 0, true).unwrap();
    ///
    /// assert!(matches!(g.contract(ab), Ok(Contraction::Merged { .. })));
    /// assert_eq!(g.vertex_count(), 2);
    /// // a-c and the rewired b-c are now parallel
    /// assert_eq!(g.edge_count(), 2);
    /// ```
    pub fn contract(&mut self, edge: EdgeId) -> Result<Contraction> {
        let (begin, end) = match self.edge(edge) {
            Some(e) => (e.init(), e.end()),
            None => {
                return Err(Error::InvariantViolation(format!(
                    "cannot contract {:?}: not an edge of this graph",
                    edge
                )))
            }
        };

        if begin == end {
            self.unlink(edge);
            trace!("discarded self-loop {:?} on {:?}", edge, begin);
            return Ok(Contraction::SelfLoopDiscarded);
        }

        self.unlink(edge);
        let mut discarded_edges = 1;

        // Detach end's list up front so unlinking below only touches begin.
        let incident = match self.vertex_mut(end) {
            Some(v) => std::mem::take(&mut v.edges),
            None => {
                return Err(Error::InvariantViolation(format!(
                    "edge {:?} points at missing vertex {:?}",
                    edge, end
                )))
            }
        };

        let mut rewired = Vec::with_capacity(incident.len());
        for id in incident {
            let Some(e) = self.edges.get_mut(id.0).and_then(Option::as_mut) else {
                continue;
            };
            let far = if e.init == end { e.end } else { e.init };
            if far == begin || far == end {
                self.unlink(id);
                discarded_edges += 1;
                continue;
            }
            if e.init == end {
                e.init = begin;
            } else {
                e.end = begin;
            }
            rewired.push(id);
        }

        let merged = self.evict(end).ok_or_else(|| {
            Error::InvariantViolation(format!("vertex {:?} vanished during contraction", end))
        })?;
        let survivor = self.vertex_mut(begin).ok_or_else(|| {
            Error::InvariantViolation(format!("vertex {:?} vanished during contraction", begin))
        })?;
        survivor.edges.extend(rewired);
        survivor.members.extend(merged.members);

        trace!(
            "merged {:?} into {:?}, discarded {} edge(s)",
            end,
            begin,
            discarded_edges
        );
        Ok(Contraction::Merged {
            survivor: begin,
            removed: end,
            discarded_edges,
        })
    }
}
