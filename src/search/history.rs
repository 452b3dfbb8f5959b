//! History-augmented shortest path.
//!
//! The same forward sweep as the index-bounded engine, except that each
//! vertex record also carries the accumulator of the best path reaching
//! it. Edge lengths may consult that accumulator, so the cost of an edge
//! can depend on how its source was reached: repeated-move penalties,
//! fatigue models, mode-switch costs and the like.
//!
//! Only the accumulator of the currently best path to a vertex is kept.
//! If a longer prefix would have produced a globally cheaper continuation
//! through its history, the sweep will not see it; callers needing that
//! must fold the distinguishing state into the vertex itself (the dynamic
//! engine's step-counting vertices are one way to do that).

use num_traits::Zero;

use crate::contract::HistoryGraph;
use crate::search::NoPath;

/// Per-vertex relaxation state, including the accumulator of the best
/// path to the vertex. `shortest` and `history` are meaningful only while
/// `reached` is set; all three are rewritten together on relaxation.
struct VertexRecord<E, H, L> {
    shortest: L,
    reached: bool,
    prev: Option<(usize, E)>,
    history: H,
}

/// Returns the shortest path from vertex `0` to vertex `n`, threading the
/// caller's history accumulator along every relaxation.
///
/// The start vertex carries `History::default()`. Unreached vertices are
/// skipped as relaxation sources, exactly as in
/// [`crate::search::shortest_path`]; their placeholder history is never
/// observed. Forward-edge discarding and strict-`<` tie-breaking also
/// match the index-bounded engine.
///
/// # Errors
///
/// Returns [`NoPath`] if vertex `n` is unreachable from vertex `0`.
pub fn shortest_path_with_history<G: HistoryGraph>(
    g: &G,
    n: usize,
) -> Result<Vec<G::Edge>, NoPath> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut info: Vec<VertexRecord<G::Edge, G::History, G::Length>> = (0..=n)
        .map(|_| VertexRecord {
            shortest: G::Length::zero(),
            reached: false,
            prev: None,
            history: G::History::default(),
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
            let new_length = info[v].shortest + g.length(v, &info[v].history, e);
            if !info[w].reached || new_length < info[w].shortest {
                let history = g.update_history(&info[v].history, v, e);
                info[w].shortest = new_length;
                info[w].prev = Some((v, e.clone()));
                info[w].history = history;
                info[w].reached = true;
            }
        }
    }

    if !info[n].reached {
        #[cfg(feature = "tracing")]
        tracing::trace!(n, "history sweep exhausted before the target");
        return Err(NoPath);
    }

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
    tracing::trace!(n, edges = path.len(), "history-augmented path found");

    Ok(path)
}
