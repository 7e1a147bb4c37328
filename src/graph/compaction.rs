//! Removal of vertices that only pass a plain corridor through

use crate::graph::multigraph::{EdgeId, Graph, GraphEdge};

/// Edge that can be fused with a follow-up edge through a shared vertex
pub trait CompactableEdge: GraphEdge {
    /// Whether the edge is an ordinary two-way passage step
    fn is_plain_passage(&self) -> bool;

    /// Fuse `self` (`A -> V`) with `next` (`V -> B`) into `A -> B`
    ///
    /// The shared vertex becomes an intermediate of the fused edge.
    #[must_use]
    fn join(&self, next: &Self) -> Self;
}

/// Vertex removed by compaction together with its former neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compaction<V> {
    /// The removed vertex
    pub removed: V,
    /// The two vertices now joined directly
    pub neighbors: (V, V),
}

/// Fold every pass-through vertex into the edges crossing it
///
/// A vertex qualifies when it has exactly two incoming and two outgoing
/// plain passage edges forming two reverse pairs towards two distinct
/// neighbours, neither of which is the vertex itself. Runs until no vertex
/// qualifies.
pub fn compact_vertices<E: CompactableEdge>(graph: &mut Graph<E>) -> Vec<Compaction<E::Vertex>> {
    let mut compactions = Vec::new();
    loop {
        let candidates: Vec<E::Vertex> = graph.vertices().collect();
        let mut changed = false;
        for vertex in candidates {
            if let Some(compaction) = compact_vertex(graph, vertex) {
                compactions.push(compaction);
                changed = true;
            }
        }
        if !changed {
            return compactions;
        }
    }
}

fn compact_vertex<E: CompactableEdge>(
    graph: &mut Graph<E>,
    vertex: E::Vertex,
) -> Option<Compaction<E::Vertex>> {
    let outgoing: Vec<(EdgeId, E)> = graph
        .outgoing(vertex)
        .map(|(id, edge)| (id, edge.clone()))
        .collect();
    let incoming: Vec<(EdgeId, E)> = graph
        .incoming(vertex)
        .map(|(id, edge)| (id, edge.clone()))
        .collect();
    let [(out_a_id, out_a), (out_b_id, out_b)] = outgoing.as_slice() else {
        return None;
    };
    let [(in_a_id, in_a), (in_b_id, in_b)] = incoming.as_slice() else {
        return None;
    };
    let all_plain = [out_a, out_b, in_a, in_b]
        .iter()
        .all(|edge| edge.is_plain_passage());
    let (a, b) = (out_a.destination(), out_b.destination());
    if !all_plain || a == vertex || b == vertex || a == b {
        return None;
    }

    // Pair each outgoing edge with the incoming edge coming back from it
    let (back_from_a, back_from_b) = if in_a.is_reverse_of(out_a) && in_b.is_reverse_of(out_b) {
        (in_a, in_b)
    } else if in_b.is_reverse_of(out_a) && in_a.is_reverse_of(out_b) {
        (in_b, in_a)
    } else {
        return None;
    };

    let forward = back_from_a.join(out_b);
    let backward = back_from_b.join(out_a);
    for id in [*out_a_id, *out_b_id, *in_a_id, *in_b_id] {
        graph.remove_edge(id);
    }
    graph.append_edge(forward);
    graph.append_edge(backward);
    Some(Compaction {
        removed: vertex,
        neighbors: (a, b),
    })
}
