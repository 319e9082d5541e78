use super::*;
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

/// A(0)-B(1) 4, B-C(2) 3, A-C 10
fn triangle() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(NodeId(0), 100.0, 100.0, "A");
    graph.add_node(NodeId(1), 200.0, 100.0, "B");
    graph.add_node(NodeId(2), 150.0, 200.0, "C");
    graph.add_edge(NodeId(0), NodeId(1), 4.0);
    graph.add_edge(NodeId(1), NodeId(2), 3.0);
    graph.add_edge(NodeId(0), NodeId(2), 10.0);
    graph
}

fn path_cost(graph: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(pair[0])
                .iter()
                .filter(|n| n.node == pair[1])
                .map(|n| n.weight)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

/// Minimum cost over all simple paths, by exhaustive DFS
fn brute_force_min(graph: &Graph, start: NodeId, end: NodeId) -> f64 {
    fn dfs(
        graph: &Graph,
        current: NodeId,
        end: NodeId,
        cost: f64,
        seen: &mut HashSet<NodeId>,
        best: &mut f64,
    ) {
        if current == end {
            *best = best.min(cost);
            return;
        }
        for neighbor in graph.neighbors(current) {
            if seen.insert(neighbor.node) {
                dfs(graph, neighbor.node, end, cost + neighbor.weight, seen, best);
                seen.remove(&neighbor.node);
            }
        }
    }

    let mut best = f64::INFINITY;
    let mut seen = HashSet::from([start]);
    dfs(graph, start, end, 0.0, &mut seen, &mut best);
    best
}

fn random_graph(rng: &mut StdRng) -> Graph {
    let mut graph = Graph::new();
    let node_count = rng.gen_range(1..=7u32);
    for id in 0..node_count {
        graph.add_node(NodeId(id), 0.0, 0.0, id.to_string());
    }
    let edge_count = rng.gen_range(0..=node_count * 2);
    for _ in 0..edge_count {
        let from = NodeId(rng.gen_range(0..node_count));
        let to = NodeId(rng.gen_range(0..node_count));
        let weight = rng.gen_range(0..20) as f64;
        graph.add_edge(from, to, weight);
    }
    graph
}

#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: NodeId(0),
        distance: Distance::new(1.0),
        seq: 0,
    };
    let entry2 = HeapEntry {
        node_id: NodeId(1),
        distance: Distance::new(2.0),
        seq: 1,
    };
    let entry3 = HeapEntry {
        node_id: NodeId(2),
        distance: Distance::new(1.0),
        seq: 2,
    };

    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to insertion order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_min_heap_pops_in_distance_then_fifo_order() {
    let mut heap = BinaryHeap::new();
    for (seq, (id, dist)) in [(0, 5.0), (1, 1.0), (2, 1.0), (3, 0.5)]
        .into_iter()
        .enumerate()
    {
        heap.push(Reverse(HeapEntry {
            node_id: NodeId(id),
            distance: Distance::new(dist),
            seq: seq as u64,
        }));
    }
    let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id)).collect();
    assert_eq!(order, ids(&[3, 1, 2, 0]));
}

#[test]
fn test_triangle_scenario() {
    let graph = triangle();
    let result = find_shortest_path(&graph, NodeId(0), NodeId(2));

    assert_eq!(result.path, ids(&[0, 1, 2]));
    assert_eq!(result.distance.value(), 7.0);
    for id in ids(&[0, 1, 2]) {
        assert!(result.is_visited(id));
    }
    // B is finalized before C
    let pos = |id| result.visited.iter().position(|v| *v == id).unwrap();
    assert!(pos(NodeId(1)) < pos(NodeId(2)));
}

#[test]
fn test_search_struct_matches_function() {
    let graph = triangle();
    let result = ShortestPathSearch::new(&graph).find_shortest_path(NodeId(2), NodeId(0));
    assert_eq!(result.path, ids(&[2, 1, 0]));
    assert_eq!(result.distance.value(), 7.0);
}

#[test]
fn test_start_equals_end() {
    let graph = triangle();
    let result = find_shortest_path(&graph, NodeId(1), NodeId(1));
    assert_eq!(result.path, ids(&[1]));
    assert_eq!(result.distance, Distance::ZERO);
    assert_eq!(result.visited, ids(&[1]));
}

#[test]
fn test_isolated_single_node() {
    let mut graph = Graph::new();
    graph.add_node(NodeId(0), 0.0, 0.0, "A");
    let result = find_shortest_path(&graph, NodeId(0), NodeId(0));
    assert_eq!(result.path, ids(&[0]));
    assert_eq!(result.distance.value(), 0.0);
}

#[test]
fn test_disconnected_pair() {
    let mut graph = Graph::new();
    graph.add_node(NodeId(0), 0.0, 0.0, "A");
    graph.add_node(NodeId(1), 50.0, 0.0, "B");
    let result = find_shortest_path(&graph, NodeId(0), NodeId(1));
    assert!(result.path.is_empty());
    assert!(!result.found());
    assert!(!result.distance.is_finite());
    assert_eq!(result.visited, ids(&[0]));
}

#[test]
fn test_unknown_end_node() {
    let graph = triangle();
    let result = find_shortest_path(&graph, NodeId(0), NodeId(99));
    assert!(result.path.is_empty());
    assert!(!result.distance.is_finite());
    // Every reachable node was finalized before the frontier ran dry
    assert_eq!(result.visited.len(), 3);
}

#[test]
fn test_unknown_start_node() {
    let graph = triangle();
    let result = find_shortest_path(&graph, NodeId(42), NodeId(0));
    assert!(result.path.is_empty());
    assert_eq!(result.visited, ids(&[42]));
}

#[test]
fn test_early_termination_skips_far_nodes() {
    let mut graph = Graph::new();
    for id in 0..4 {
        graph.add_node(NodeId(id), 0.0, 0.0, id.to_string());
    }
    graph.add_edge(NodeId(0), NodeId(1), 1.0);
    graph.add_edge(NodeId(0), NodeId(2), 50.0);
    graph.add_edge(NodeId(2), NodeId(3), 1.0);

    let result = find_shortest_path(&graph, NodeId(0), NodeId(1));
    assert_eq!(result.path, ids(&[0, 1]));
    assert!(!result.is_visited(NodeId(2)));
    assert!(!result.is_visited(NodeId(3)));
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = Graph::new();
    graph.add_node(NodeId(0), 0.0, 0.0, "A");
    graph.add_node(NodeId(1), 0.0, 0.0, "B");
    graph.add_edge(NodeId(0), NodeId(1), 9.0);
    graph.add_edge(NodeId(1), NodeId(0), 2.0);

    let result = find_shortest_path(&graph, NodeId(0), NodeId(1));
    assert_eq!(result.distance.value(), 2.0);
}

#[test]
fn test_stale_frontier_entries_are_skipped() {
    // 0->2 is relaxed twice (10 then 2); the stale entry must not re-finalize 2
    let mut graph = Graph::new();
    for id in 0..4 {
        graph.add_node(NodeId(id), 0.0, 0.0, id.to_string());
    }
    graph.add_edge(NodeId(0), NodeId(2), 10.0);
    graph.add_edge(NodeId(0), NodeId(1), 1.0);
    graph.add_edge(NodeId(1), NodeId(2), 1.0);
    graph.add_edge(NodeId(2), NodeId(3), 1.0);

    let result = find_shortest_path(&graph, NodeId(0), NodeId(3));
    assert_eq!(result.path, ids(&[0, 1, 2, 3]));
    assert_eq!(result.distance.value(), 3.0);
    let unique: HashSet<NodeId> = result.visited.iter().copied().collect();
    assert_eq!(unique.len(), result.visited.len());
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::new();
    for id in 0..3 {
        graph.add_node(NodeId(id), 0.0, 0.0, id.to_string());
    }
    graph.add_edge(NodeId(0), NodeId(1), 0.0);
    graph.add_edge(NodeId(1), NodeId(2), 0.0);

    let result = find_shortest_path(&graph, NodeId(0), NodeId(2));
    assert_eq!(result.path, ids(&[0, 1, 2]));
    assert_eq!(result.distance, Distance::ZERO);
}

#[test]
fn test_lazily_created_endpoints_are_reachable() {
    let mut graph = Graph::new();
    graph.add_node(NodeId(0), 0.0, 0.0, "A");
    graph.add_edge(NodeId(0), NodeId(7), 2.5);

    let result = find_shortest_path(&graph, NodeId(0), NodeId(7));
    assert_eq!(result.path, ids(&[0, 7]));
    assert_eq!(result.distance.value(), 2.5);
}

#[test]
fn test_repeated_search_is_idempotent() {
    let graph = triangle();
    let first = find_shortest_path(&graph, NodeId(0), NodeId(2));
    let second = find_shortest_path(&graph, NodeId(0), NodeId(2));
    assert_eq!(first.path, second.path);
    assert_eq!(first.distance, second.distance);
    assert_eq!(first.visited, second.visited);
}

#[test]
fn test_random_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let graph = random_graph(&mut rng);
        let n = graph.node_count() as u32;
        let start = NodeId(rng.gen_range(0..n));
        let end = NodeId(rng.gen_range(0..n));

        let result = find_shortest_path(&graph, start, end);
        let expected = brute_force_min(&graph, start, end);

        assert!(result.is_visited(start));
        assert!(result.visited.len() <= graph.node_count());

        if expected.is_finite() {
            assert!(result.found());
            assert_eq!(result.distance.value(), expected);
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&end));
            assert_eq!(path_cost(&graph, &result.path), result.distance.value());
            assert!(result.is_visited(end));
        } else {
            assert!(!result.found());
            assert!(!result.distance.is_finite());
            assert!(!result.is_visited(end));
        }
    }
}
