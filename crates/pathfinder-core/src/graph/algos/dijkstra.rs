use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, trace};

use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Distance, NodeId, SearchResult};
use crate::graph::GraphProvider;

/// Frontier entry for the min-heap, ordered by distance then insertion order
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub distance: Distance,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during one search
struct DijkstraState {
    distances: HashMap<NodeId, Distance>,
    previous: HashMap<NodeId, NodeId>,
    visited: HashSet<NodeId>,
    visit_order: Vec<NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    stale_pops: usize,
}

impl DijkstraState {
    fn new(provider: &dyn GraphProvider, start: NodeId) -> Self {
        let mut distances: HashMap<NodeId, Distance> = provider
            .node_ids()
            .into_iter()
            .map(|id| (id, Distance::INFINITY))
            .collect();
        distances.insert(start, Distance::ZERO);

        let mut state = Self {
            distances,
            previous: HashMap::new(),
            visited: HashSet::new(),
            visit_order: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            stale_pops: 0,
        };
        state.push(start, Distance::ZERO);
        state
    }

    fn push(&mut self, node_id: NodeId, distance: Distance) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn distance(&self, id: NodeId) -> Distance {
        self.distances.get(&id).copied().unwrap_or(Distance::INFINITY)
    }

    /// Pop the closest entry not yet finalized
    fn pop_unvisited(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.visited.contains(&entry.node_id) {
                self.stale_pops += 1;
                continue;
            }
            return Some(entry.node_id);
        }
        None
    }

    fn finalize(&mut self, id: NodeId) {
        self.visited.insert(id);
        self.visit_order.push(id);
    }

    fn relax_neighbors(&mut self, provider: &dyn GraphProvider, current: NodeId) {
        let base = self.distance(current);
        for neighbor in provider.neighbors(current) {
            if self.visited.contains(&neighbor.node) {
                continue;
            }
            let candidate = base + neighbor.weight;
            if candidate < self.distance(neighbor.node) {
                trace!(from = %current, to = %neighbor.node, distance = candidate.value(), "relax");
                self.distances.insert(neighbor.node, candidate);
                self.previous.insert(neighbor.node, current);
                self.push(neighbor.node, candidate);
            }
        }
    }
}

/// Dijkstra search bound to one graph snapshot
pub struct ShortestPathSearch<'g> {
    provider: &'g dyn GraphProvider,
}

impl<'g> ShortestPathSearch<'g> {
    pub fn new(provider: &'g dyn GraphProvider) -> Self {
        Self { provider }
    }

    pub fn find_shortest_path(&self, start: NodeId, end: NodeId) -> SearchResult {
        find_shortest_path(self.provider, start, end)
    }
}

/// Find a minimum-weight path from `start` to `end`.
///
/// Edge weights must be non-negative; the search stops as soon as `end` is
/// finalized. An unreachable or unknown `end` yields an empty path and an
/// infinite distance.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn find_shortest_path(
    provider: &dyn GraphProvider,
    start: NodeId,
    end: NodeId,
) -> SearchResult {
    let started = Instant::now();
    let mut state = DijkstraState::new(provider, start);

    while let Some(current) = state.pop_unvisited() {
        state.finalize(current);
        if current == end {
            break;
        }
        state.relax_neighbors(provider, current);
    }

    let path = reconstruct_path(start, end, &state.previous);
    let distance = state.distance(end);
    let execution_time = started.elapsed();

    debug!(
        found = !path.is_empty(),
        distance = distance.value(),
        visited = state.visit_order.len(),
        stale_pops = state.stale_pops,
        elapsed = ?execution_time,
        "shortest_path"
    );

    SearchResult {
        path,
        distance,
        visited: state.visit_order,
        execution_time,
    }
}

#[cfg(test)]
mod tests;
