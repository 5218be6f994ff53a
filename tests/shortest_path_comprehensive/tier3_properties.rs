//! Tier 3: property tests against an independent reference BFS.
//!
//! The reference implementation is deliberately structured nothing like the
//! engine: hash maps keyed by raw external ids, no dense remapping.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use hopgraph::VertexId;

use crate::test_utils::{graph_of, hops_between, id};

const UNIVERSE: i64 = 12;

fn edge_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0..UNIVERSE, 0..UNIVERSE), 1..40)
}

/// Unweighted BFS distances from `origin` over the undirected edge list.
/// Vertices never mentioned in an edge are absent from the result.
fn reference_distances(edges: &[(i64, i64)], origin: i64) -> HashMap<i64, usize> {
    let mut adjacency: HashMap<i64, HashSet<i64>> = HashMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }

    let mut distances = HashMap::new();
    if !adjacency.contains_key(&origin) {
        return distances;
    }
    distances.insert(origin, 0);
    let mut queue = VecDeque::from([origin]);
    while let Some(current) = queue.pop_front() {
        let next = distances[&current] + 1;
        for &neighbor in &adjacency[&current] {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

fn undirected_pairs(edges: &[(i64, i64)]) -> HashSet<(i64, i64)> {
    let mut pairs = HashSet::new();
    for &(a, b) in edges {
        pairs.insert((a, b));
        pairs.insert((b, a));
    }
    pairs
}

proptest! {
    #[test]
    fn test_path_length_matches_reference_bfs(edges in edge_strategy()) {
        let graph = graph_of(&edges);
        let origin = edges[0].0;
        let reference = reference_distances(&edges, origin);

        for target in 0..UNIVERSE {
            match (graph.shortest_path(id(origin), id(target)), reference.get(&target)) {
                (Ok(path), Some(&distance)) => prop_assert_eq!(path.hops(), distance),
                (Err(_), None) => {}
                (Ok(path), None) => {
                    prop_assert!(false, "engine reached {} via {} but reference did not", target, path)
                }
                (Err(err), Some(distance)) => {
                    prop_assert!(false, "reference reached {} at {} hops but engine said {}", target, distance, err)
                }
            }
        }
    }

    #[test]
    fn test_returned_path_is_a_real_walk(edges in edge_strategy()) {
        let graph = graph_of(&edges);
        let pairs = undirected_pairs(&edges);
        let origin = edges[0].0;

        for target in 0..UNIVERSE {
            let path = match graph.shortest_path(id(origin), id(target)) {
                Ok(path) => path,
                Err(_) => continue,
            };
            let vertices: Vec<VertexId> = path.vertices().to_vec();
            prop_assert_eq!(vertices.first(), Some(&id(origin)));
            prop_assert_eq!(vertices.last(), Some(&id(target)));
            for pair in vertices.windows(2) {
                prop_assert!(
                    pairs.contains(&(pair[0].get(), pair[1].get())),
                    "step {} -> {} is not an ingested connection", pair[0], pair[1]
                );
            }
            // A shortest path never revisits a vertex.
            let distinct: HashSet<VertexId> = vertices.iter().copied().collect();
            prop_assert_eq!(distinct.len(), vertices.len());
        }
    }

    #[test]
    fn test_repeated_ingest_is_invisible(edges in edge_strategy()) {
        let once = graph_of(&edges);
        let mut doubled = edges.clone();
        doubled.extend(edges.iter().copied());
        let twice = graph_of(&doubled);

        prop_assert_eq!(once.stats(), twice.stats());
        let origin = edges[0].0;
        for target in 0..UNIVERSE {
            prop_assert_eq!(
                hops_between(&once, origin, target),
                hops_between(&twice, origin, target)
            );
        }
    }

    #[test]
    fn test_hop_count_is_symmetric(edges in edge_strategy()) {
        let graph = graph_of(&edges);
        for a in 0..UNIVERSE {
            for b in (a + 1)..UNIVERSE {
                prop_assert_eq!(
                    hops_between(&graph, a, b),
                    hops_between(&graph, b, a),
                    "asymmetry between {} and {}", a, b
                );
            }
        }
    }
}
