// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap};

use crate::Graph;

#[derive(Debug, Clone)]
struct QueueItem {
    at: String,
    cost: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        // NOTE: We revert the order of comparison,
        // as lower costs are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other.cost.partial_cmp(&self.cost)
    }
}

impl Eq for QueueItem {}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.partial_cmp(self).unwrap()
    }
}

/// The full single-source Dijkstra result for one source vertex.
///
/// Costs and predecessor edges for every vertex reachable from the source.
/// Computed once and kept by the [PathOracle](super::PathOracle), so repeated
/// queries from the same origin within a planning pass reuse one expansion.
#[derive(Debug)]
pub(super) struct ShortestPathTree {
    source: String,
    costs: HashMap<String, f64>,
    came_from: HashMap<String, (String, usize)>,
}

impl ShortestPathTree {
    /// Total path weight from the source, or None if unreachable.
    pub(super) fn cost_to(&self, id: &str) -> Option<f64> {
        self.costs.get(id).copied()
    }

    /// Indices of the edges on the shortest path from the source, in walk
    /// order. Empty for the source itself, None if unreachable.
    pub(super) fn edges_to(&self, id: &str) -> Option<Vec<usize>> {
        if id == self.source {
            return Some(vec![]);
        }
        if !self.came_from.contains_key(id) {
            return None;
        }

        let mut path = vec![];
        let mut last = id;
        while let Some((previous, edge_index)) = self.came_from.get(last) {
            path.push(*edge_index);
            last = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// from the given source, expanding the whole reachable component.
///
/// The caller must have validated that `source` exists in the graph.
/// Weights are validated as non-negative at graph construction, so the
/// search always terminates.
pub(super) fn shortest_path_tree(g: &Graph, source: &str) -> ShortestPathTree {
    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: HashMap<String, (String, usize)> = HashMap::default();
    let mut costs: HashMap<String, f64> = HashMap::default();

    queue.push(QueueItem {
        at: source.to_string(),
        cost: 0.0,
    });
    costs.insert(source.to_string(), 0.0);

    while let Some(item) = queue.pop() {
        // Contrary to the textbook definition, we might keep multiple items
        // in the queue for the same vertex. Skip the stale ones.
        if item.cost > costs.get(&item.at).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for &edge_index in g.adjacent(&item.at) {
            let edge = g.edge_at(edge_index);
            let neighbor = edge.other_endpoint(&item.at);

            // Check if this is the cheapest known way to the neighbor
            let neighbor_cost = item.cost + edge.weight;
            if neighbor_cost >= costs.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                continue;
            }

            came_from.insert(neighbor.to_string(), (item.at.clone(), edge_index));
            costs.insert(neighbor.to_string(), neighbor_cost);
            queue.push(QueueItem {
                at: neighbor.to_string(),
                cost: neighbor_cost,
            });
        }
    }

    ShortestPathTree {
        source: source.to_string(),
        costs,
        came_from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Vertex, VertexKind};

    fn graph() -> Graph {
        //   gate ──10── a ──20── b
        //    │                   │
        //    └────────50─────────┘
        //
        //   island (no edges)
        let vertex = |id: &str, kind| Vertex {
            id: id.to_string(),
            kind,
            name: id.to_string(),
            group_id: None,
            lat: 0.0,
            lng: 0.0,
            tags: vec![],
        };
        let edge = |id: &str, a: &str, b: &str, weight| Edge {
            id: id.to_string(),
            endpoint_a: a.to_string(),
            endpoint_b: b.to_string(),
            weight,
            street: id.to_string(),
        };

        Graph::new(
            vec![
                vertex("gate", VertexKind::Gate),
                vertex("a", VertexKind::Intersection),
                vertex("b", VertexKind::Exhibit),
                vertex("island", VertexKind::Exhibit),
            ],
            vec![
                edge("e0", "gate", "a", 10.0),
                edge("e1", "a", "b", 20.0),
                edge("e2", "b", "gate", 50.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn costs_and_paths() {
        let g = graph();
        let tree = shortest_path_tree(&g, "gate");

        assert_eq!(tree.cost_to("gate"), Some(0.0));
        assert_eq!(tree.cost_to("a"), Some(10.0));
        assert_eq!(tree.cost_to("b"), Some(30.0));

        assert_eq!(tree.edges_to("gate"), Some(vec![]));
        let path: Vec<&str> = tree
            .edges_to("b")
            .unwrap()
            .into_iter()
            .map(|i| g.edge_at(i).id.as_str())
            .collect();
        assert_eq!(path, ["e0", "e1"]);
    }

    #[test]
    fn unreachable_vertex() {
        let g = graph();
        let tree = shortest_path_tree(&g, "gate");
        assert_eq!(tree.cost_to("island"), None);
        assert_eq!(tree.edges_to("island"), None);
    }
}
