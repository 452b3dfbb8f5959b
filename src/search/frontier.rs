//! Dynamically ordered shortest path.
//!
//! The vertex space here is open-ended: vertices are discovered by
//! following edges, and only the caller's [`Before`] order says where a
//! vertex sits. The sweep therefore keeps an explicit frontier, an open
//! set of discovered-but-unexpanded records sorted by vertex order, and
//! always expands the order-smallest record next, which makes it a valid
//! forward DP over a graph it has never seen whole. Once any completion
//! is known, records that can no longer beat it are skipped without
//! expansion (branch and bound).
//!
//! Expanded records outlive the open set: they form the predecessor tree
//! the final path is read from. Both live in one arena, linked by index,
//! so the tree needs no ownership cycles.
//!
//! Complexity is O((V' + E') log V') in the number of vertices actually
//! discovered, which may be far smaller than the vertex space. An
//! unreachable `end` over an infinite graph does not terminate; bounding
//! the search is the caller's concern.

use core::cmp::Ordering;

use num_traits::Zero;

use crate::contract::{Before, DynamicGraph};
use crate::search::NoPath;

/// Arena-resident relaxation record.
///
/// `prev` is the arena index of the predecessor record plus the edge
/// taken from it; the records form a tree rooted at the start vertex.
struct FrontierRecord<V, E, L> {
    vertex: V,
    shortest: L,
    prev: Option<(usize, E)>,
}

/// Returns the shortest path from `start` to the first vertex that is not
/// [`Before`] `end`, that is, to any vertex at or past `end` in the
/// caller's order.
///
/// `start == end` (neither before the other) succeeds with an empty path.
/// Edges that lead backward (`to(v, e).before(v)`) are discarded without
/// error. When several vertices at or past `end` are reached, the one
/// with the smallest path length wins; among equal-length routes the
/// first-discovered one is kept.
///
/// # Errors
///
/// Returns [`NoPath`] if `end` precedes `start`, or if the frontier
/// empties before any vertex at or past `end` is found.
pub fn shortest_path_dynamic<G: DynamicGraph>(
    g: &G,
    start: G::Vertex,
    end: G::Vertex,
) -> Result<Vec<G::Edge>, NoPath> {
    if end.before(&start) {
        return Err(NoPath);
    }

    // Every record ever created lives in the arena; `open` holds the
    // indices of records not yet expanded, sorted by vertex order.
    let mut arena: Vec<FrontierRecord<G::Vertex, G::Edge, G::Length>> = vec![FrontierRecord {
        vertex: start,
        shortest: G::Length::zero(),
        prev: None,
    }];
    let mut open: Vec<usize> = vec![0];

    let mut edges = Vec::new();
    let mut arrived = false;
    let mut best_length = G::Length::zero();

    while let Some(&front) = open.first() {
        if !arena[front].vertex.before(&end) {
            break;
        }
        open.remove(0);

        // A complete path of length `best_length` already exists; a
        // record that cannot beat it will not improve any completion.
        if arrived && arena[front].shortest >= best_length {
            continue;
        }

        edges.clear();
        g.append_edges(&mut edges, &arena[front].vertex);
        for e in &edges {
            let w = g.to(&arena[front].vertex, e);
            if w.before(&arena[front].vertex) {
                continue;
            }
            let new_length = arena[front].shortest + g.length(&arena[front].vertex, e);

            if !w.before(&end) {
                // Completion candidate: the first one always counts,
                // later ones only on strict improvement.
                if !arrived || new_length < best_length {
                    best_length = new_length;
                }
                arrived = true;
            }

            let slot = open.binary_search_by(|&i| {
                if arena[i].vertex.before(&w) {
                    Ordering::Less
                } else if w.before(&arena[i].vertex) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
            match slot {
                Err(insert_at) => {
                    arena.push(FrontierRecord {
                        vertex: w,
                        shortest: new_length,
                        prev: Some((front, e.clone())),
                    });
                    open.insert(insert_at, arena.len() - 1);
                }
                Ok(found_at) => {
                    let found = open[found_at];
                    if new_length < arena[found].shortest {
                        arena[found].shortest = new_length;
                        arena[found].prev = Some((front, e.clone()));
                    }
                }
            }
        }
    }

    if open.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(discovered = arena.len(), "frontier emptied without completion");
        return Err(NoPath);
    }

    // Popping stopped at the order boundary, so every surviving record is
    // at or past `end`; insertion order is not cost order, so all of them
    // compete for the smallest recorded length.
    let mut best = open[0];
    for &idx in &open[1..] {
        if arena[idx].shortest < arena[best].shortest {
            best = idx;
        }
    }

    let mut steps = 0;
    let mut cursor = best;
    while let Some((from, _)) = &arena[cursor].prev {
        steps += 1;
        cursor = *from;
    }

    let mut path = Vec::with_capacity(steps);
    let mut cursor = best;
    while let Some((from, via)) = &arena[cursor].prev {
        path.push(via.clone());
        cursor = *from;
    }
    path.reverse();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        discovered = arena.len(),
        survivors = open.len(),
        edges = path.len(),
        "dynamic path found"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A position plus the number of steps taken to reach it. Ordered by
    /// position first, then by step count.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct StepVertex {
        pos: i64,
        steps: u32,
    }

    impl Before for StepVertex {
        fn before(&self, other: &Self) -> bool {
            if self.pos != other.pos {
                self.pos < other.pos
            } else {
                self.steps < other.steps
            }
        }
    }

    /// Chain over [`StepVertex`]: one edge per vertex, to the next
    /// position. The edge value is the target position.
    struct DynamicLinearGraph;

    impl DynamicGraph for DynamicLinearGraph {
        type Vertex = StepVertex;
        type Edge = i64;
        type Length = u32;

        fn append_edges(&self, edges: &mut Vec<i64>, v: &StepVertex) {
            edges.push(v.pos + 1);
        }

        fn length(&self, _v: &StepVertex, _e: &i64) -> u32 {
            1
        }

        fn to(&self, v: &StepVertex, e: &i64) -> StepVertex {
            StepVertex {
                pos: *e,
                steps: v.steps + 1,
            }
        }
    }

    #[test]
    fn end_before_start_is_no_path() {
        let start = StepVertex { pos: 0, steps: 0 };
        let end = StepVertex { pos: -1, steps: 0 };
        assert_eq!(shortest_path_dynamic(&DynamicLinearGraph, start, end), Err(NoPath));
    }

    #[test]
    fn end_equals_start_is_empty_path() {
        let v = StepVertex { pos: 0, steps: 0 };
        let path = shortest_path_dynamic(&DynamicLinearGraph, v, v).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn dynamic_linear_chain() {
        let start = StepVertex { pos: 0, steps: 0 };
        let end = StepVertex { pos: 100, steps: 0 };
        let path = shortest_path_dynamic(&DynamicLinearGraph, start, end).unwrap();
        assert_eq!(path.len(), 100);
        for (i, e) in path.iter().enumerate() {
            assert_eq!(*e, i as i64 + 1);
        }
    }

    /// Parallel `true`/`false` edges to the next integer, costing 1 and
    /// 2, enumerated cheap-first on even vertices only.
    struct DynamicDoubleEdgesGraph;

    impl DynamicGraph for DynamicDoubleEdgesGraph {
        type Vertex = i64;
        type Edge = bool;
        type Length = u32;

        fn append_edges(&self, edges: &mut Vec<bool>, v: &i64) {
            assert!(*v < 100, "expansion overshot the target");
            if v % 2 == 0 {
                edges.extend([true, false]);
            } else {
                edges.extend([false, true]);
            }
        }

        fn length(&self, _v: &i64, e: &bool) -> u32 {
            if *e {
                1
            } else {
                2
            }
        }

        fn to(&self, v: &i64, _e: &bool) -> i64 {
            v + 1
        }
    }

    #[test]
    fn cheap_parallel_edge_wins() {
        let path = shortest_path_dynamic(&DynamicDoubleEdgesGraph, 0, 100).unwrap();
        assert_eq!(path.len(), 100);
        assert!(path.iter().all(|e| *e));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let a = shortest_path_dynamic(&DynamicDoubleEdgesGraph, 0, 100).unwrap();
        let b = shortest_path_dynamic(&DynamicDoubleEdgesGraph, 0, 100).unwrap();
        assert_eq!(a, b);
    }

    /// Expensive direct hop to the end plus a cheap two-edge detour.
    /// The edge value is the target vertex.
    struct DetourGraph;

    impl DynamicGraph for DetourGraph {
        type Vertex = u32;
        type Edge = u32;
        type Length = u32;

        fn append_edges(&self, edges: &mut Vec<u32>, v: &u32) {
            match v {
                0 => edges.extend([100, 1, 2]),
                1 => edges.push(100),
                2 => edges.push(100),
                _ => {}
            }
        }

        fn length(&self, v: &u32, e: &u32) -> u32 {
            match (*v, *e) {
                (0, 100) => 10,
                (0, 1) => 1,
                (0, 2) => 20,
                (1, 100) => 2,
                (2, 100) => 0,
                _ => unreachable!("no such edge"),
            }
        }

        fn to(&self, _v: &u32, e: &u32) -> u32 {
            *e
        }
    }

    #[test]
    fn later_cheaper_completion_replaces_first() {
        // Direct hop costs 10, the detour through 1 costs 3. Vertex 2 is
        // popped after the bound has dropped to 3 and is pruned (its own
        // length 20 already exceeds the bound).
        let path = shortest_path_dynamic(&DetourGraph, 0, 100).unwrap();
        assert_eq!(path, vec![1, 100]);
    }

    #[test]
    fn no_outgoing_edges_is_no_path() {
        struct DeadEnd;

        impl DynamicGraph for DeadEnd {
            type Vertex = u32;
            type Edge = u32;
            type Length = u32;

            fn append_edges(&self, _edges: &mut Vec<u32>, _v: &u32) {}

            fn length(&self, _v: &u32, _e: &u32) -> u32 {
                0
            }

            fn to(&self, _v: &u32, e: &u32) -> u32 {
                *e
            }
        }

        assert_eq!(shortest_path_dynamic(&DeadEnd, 0, 10), Err(NoPath));
    }

    #[test]
    fn backward_edges_are_ignored() {
        // Every vertex also advertises an edge back to 0; only the
        // forward chain survives.
        struct BackChain;

        impl DynamicGraph for BackChain {
            type Vertex = u32;
            type Edge = u32;
            type Length = u32;

            fn append_edges(&self, edges: &mut Vec<u32>, v: &u32) {
                if *v > 0 {
                    edges.push(0);
                }
                edges.push(v + 1);
            }

            fn length(&self, _v: &u32, _e: &u32) -> u32 {
                1
            }

            fn to(&self, _v: &u32, e: &u32) -> u32 {
                *e
            }
        }

        let path = shortest_path_dynamic(&BackChain, 0, 5).unwrap();
        assert_eq!(path, vec![1, 2, 3, 4, 5]);
    }
}
