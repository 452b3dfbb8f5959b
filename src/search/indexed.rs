//! Index-bounded shortest path.
//!
//! Vertices are the integers `0..=n` and the indices are their own
//! topological order, so a single forward sweep relaxes every edge
//! exactly once: O(V + E) time, O(V) auxiliary space.

use num_traits::Zero;

use crate::contract::Graph;
use crate::search::NoPath;

/// Per-vertex relaxation state.
///
/// `prev` holds the predecessor index and the edge taken from it, updated
/// as one value so the backpointer chain is never half-written. `shortest`
/// is meaningful only while `reached` is set.
struct VertexRecord<E, L> {
    shortest: L,
    reached: bool,
    prev: Option<(usize, E)>,
}

/// Returns the shortest path from vertex `0` to vertex `n` as the ordered
/// sequence of edges along it.
///
/// `n == 0` trivially succeeds with an empty path. Edges reported by the
/// graph that do not lead strictly forward (`to(v, e) <= v`) or that
/// overshoot the target range (`to(v, e) > n`) are discarded without
/// error. Ties are broken toward the first-discovered predecessor:
/// relaxation uses strict `<`.
///
/// # Errors
///
/// Returns [`NoPath`] if vertex `n` is unreachable from vertex `0`.
pub fn shortest_path<G: Graph>(g: &G, n: usize) -> Result<Vec<G::Edge>, NoPath> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut info: Vec<VertexRecord<G::Edge, G::Length>> = (0..=n)
        .map(|_| VertexRecord {
            shortest: G::Length::zero(),
            reached: false,
            prev: None,
        })
        .collect();
    info[0].reached = true;

    let mut edges = Vec::new();
    for v in 0..n {
        if !info[v].reached {
            continue;
        }
        edges.clear();
        g.append_edges(&mut edges, v);
        for e in &edges {
            let w = g.to(v, e);
            if w <= v || w > n {
                continue;
            }
            let new_length = info[v].shortest + g.length(v, e);
            if !info[w].reached || new_length < info[w].shortest {
                info[w].shortest = new_length;
                info[w].prev = Some((v, e.clone()));
                info[w].reached = true;
            }
        }
    }

    if !info[n].reached {
        #[cfg(feature = "tracing")]
        tracing::trace!(n, "index-bounded sweep exhausted before the target");
        return Err(NoPath);
    }

    // Walk the backpointer chain once to size the path, then fill it.
    // Indices strictly decrease along the chain, so both walks terminate.
    let mut steps = 0;
    let mut v = n;
    while v != 0 {
        let (from, _) = info[v]
            .prev
            .as_ref()
            .expect("reached vertices record their predecessor");
        steps += 1;
        v = *from;
    }

    let mut path = Vec::with_capacity(steps);
    let mut v = n;
    while v != 0 {
        let (from, via) = info[v]
            .prev
            .as_ref()
            .expect("reached vertices record their predecessor");
        path.push(via.clone());
        v = *from;
    }
    path.reverse();

    #[cfg(feature = "tracing")]
    tracing::trace!(n, edges = path.len(), "index-bounded path found");

    Ok(path)
}
