//! Tier 1: acceptance scenarios for the path-engine contract.

use hopgraph::HopError;

use crate::test_utils::{graph_of, hops_between, id};

#[test]
fn test_diamond_returns_the_lower_index_branch() {
    // Two 2-hop routes exist (via 2 and via 4); the engine must pick the
    // branch through the earlier-registered vertex.
    let graph = graph_of(&[(1, 2), (2, 3), (1, 4), (4, 3)]);

    let path = graph.shortest_path(id(1), id(3)).unwrap();
    assert_eq!(path.hops(), 2);
    assert_eq!(path.to_string(), "1 -> 2 -> 3");
}

#[test]
fn test_unknown_endpoint_reported_before_reachability() {
    let graph = graph_of(&[(5, 6)]);

    match graph.shortest_path(id(5), id(7)) {
        Err(HopError::VertexNotFound { id: missing }) => assert_eq!(missing, id(7)),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_self_query_is_a_zero_hop_path() {
    let graph = graph_of(&[(5, 6)]);

    let path = graph.shortest_path(id(6), id(6)).unwrap();
    assert_eq!(path.hops(), 0);
    assert_eq!(path.vertices(), &[id(6)]);
    assert_eq!(path.to_string(), "6");
}

#[test]
fn test_disconnected_pair_reports_path_not_found() {
    let graph = graph_of(&[(1, 2), (10, 20)]);

    match graph.shortest_path(id(1), id(20)) {
        Err(HopError::PathNotFound {
            origin,
            destination,
        }) => {
            assert_eq!(origin, id(1));
            assert_eq!(destination, id(20));
        }
        other => panic!("Expected PathNotFound, got {:?}", other),
    }
}

#[test]
fn test_unknown_origin_reported_even_when_destination_exists() {
    let graph = graph_of(&[(1, 2)]);

    match graph.shortest_path(id(99), id(2)) {
        Err(HopError::VertexNotFound { id: missing }) => assert_eq!(missing, id(99)),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_duplicate_edges_do_not_change_answers() {
    let once = graph_of(&[(1, 2), (2, 3)]);
    let repeated = graph_of(&[(1, 2), (2, 3), (1, 2), (3, 2), (2, 1)]);

    assert_eq!(once.stats(), repeated.stats());
    assert_eq!(hops_between(&once, 1, 3), hops_between(&repeated, 1, 3));
    assert_eq!(
        repeated.shortest_path(id(1), id(3)).unwrap().to_string(),
        "1 -> 2 -> 3"
    );
}

#[test]
fn test_reversed_query_has_equal_length() {
    let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5), (1, 6), (6, 5)]);

    let forward = graph.shortest_path(id(1), id(5)).unwrap();
    let backward = graph.shortest_path(id(5), id(1)).unwrap();
    assert_eq!(forward.hops(), backward.hops());
    assert_eq!(forward.hops(), 2);
}

#[test]
fn test_longer_route_is_ignored_when_a_shortcut_exists() {
    // Chain 1-2-3-4-5 plus a direct 1-5 shortcut.
    let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5), (1, 5)]);

    let path = graph.shortest_path(id(1), id(5)).unwrap();
    assert_eq!(path.hops(), 1);
    assert_eq!(path.to_string(), "1 -> 5");
}

#[test]
fn test_negative_identifiers_are_first_class() {
    let graph = graph_of(&[(-3, 0), (0, 7)]);

    let path = graph.shortest_path(id(-3), id(7)).unwrap();
    assert_eq!(path.to_string(), "-3 -> 0 -> 7");
}
