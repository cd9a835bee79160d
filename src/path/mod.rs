// SPDX-License-Identifier: MIT

mod dijkstra;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dijkstra::{shortest_path_tree, ShortestPathTree};

use crate::{Edge, Error, Graph};

/// Shortest-path queries over a [Graph], with exhibit-group aliasing.
///
/// Before touching the underlying search, both endpoints of a query are
/// replaced by their group representative via [Graph::resolve], so distances
/// to and from group members are computed against the group's single
/// physical location.
///
/// Single-source Dijkstra results are memoized per distinct source: the tour
/// planner fires many queries from the same origin in one planning pass, and
/// each of those costs one graph expansion at most.
pub struct PathOracle<'a> {
    graph: &'a Graph,
    trees: RefCell<HashMap<String, Rc<ShortestPathTree>>>,
}

impl<'a> PathOracle<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            trees: RefCell::new(HashMap::new()),
        }
    }

    /// Total weight of the shortest path between two vertices.
    ///
    /// Fails with [Error::NotFound] on unknown ids and [Error::Unreachable]
    /// if no path exists.
    pub fn path_weight(&self, a: &str, b: &str) -> Result<f64, Error> {
        let from = self.graph.resolve(a)?;
        let to = self.graph.resolve(b)?;

        self.tree(from)
            .cost_to(to)
            .ok_or_else(|| Error::Unreachable {
                from: a.to_string(),
                to: b.to_string(),
            })
    }

    /// The shortest path between two vertices, as a sequence of edges in
    /// walk order. Empty if both ids alias to the same location.
    pub fn path(&self, a: &str, b: &str) -> Result<Vec<&'a Edge>, Error> {
        let from = self.graph.resolve(a)?;
        let to = self.graph.resolve(b)?;

        let indices = self
            .tree(from)
            .edges_to(to)
            .ok_or_else(|| Error::Unreachable {
                from: a.to_string(),
                to: b.to_string(),
            })?;
        Ok(indices
            .into_iter()
            .map(|index| self.graph.edge_at(index))
            .collect())
    }

    fn tree(&self, source: &str) -> Rc<ShortestPathTree> {
        let mut trees = self.trees.borrow_mut();
        match trees.get(source) {
            Some(tree) => tree.clone(),
            None => {
                let tree = Rc::new(shortest_path_tree(self.graph, source));
                trees.insert(source.to_string(), tree.clone());
                tree
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vertex, VertexKind};

    fn vertex(id: &str, kind: VertexKind, group: Option<&str>) -> Vertex {
        Vertex {
            id: id.to_string(),
            kind,
            name: id.to_string(),
            group_id: group.map(str::to_string),
            lat: 0.0,
            lng: 0.0,
            tags: vec![],
        }
    }

    fn edge(id: &str, a: &str, b: &str, weight: f64, street: &str) -> Edge {
        Edge {
            id: id.to_string(),
            endpoint_a: a.to_string(),
            endpoint_b: b.to_string(),
            weight,
            street: street.to_string(),
        }
    }

    fn triangle() -> Graph {
        //        gate
        //       /    \
        //   A,200    C,390
        //     /        \
        //  gators─B,190─lions
        Graph::new(
            vec![
                vertex("gate", VertexKind::Gate, None),
                vertex("gators", VertexKind::Exhibit, None),
                vertex("lions", VertexKind::Exhibit, None),
            ],
            vec![
                edge("edge-a", "gate", "gators", 200.0, "A"),
                edge("edge-b", "gators", "lions", 190.0, "B"),
                edge("edge-c", "lions", "gate", 390.0, "C"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn weights_are_symmetric() {
        let g = triangle();
        let oracle = PathOracle::new(&g);

        assert_eq!(oracle.path_weight("gate", "gators").unwrap(), 200.0);
        assert_eq!(oracle.path_weight("gators", "gate").unwrap(), 200.0);
        assert_eq!(oracle.path_weight("gators", "lions").unwrap(), 190.0);
        assert_eq!(oracle.path_weight("gate", "gate").unwrap(), 0.0);
    }

    #[test]
    fn path_edges_in_walk_order() {
        let g = triangle();
        let oracle = PathOracle::new(&g);

        let path: Vec<&str> = oracle
            .path("lions", "gators")
            .unwrap()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(path, ["edge-b"]);

        assert!(oracle.path("gate", "gate").unwrap().is_empty());
    }

    #[test]
    fn group_members_alias_to_their_group() {
        let g = Graph::new(
            vec![
                vertex("gate", VertexKind::Gate, None),
                vertex("aviary", VertexKind::ExhibitGroup, None),
                vertex("finch", VertexKind::Exhibit, Some("aviary")),
                vertex("owl", VertexKind::Exhibit, Some("aviary")),
            ],
            vec![edge("e0", "gate", "aviary", 75.0, "Bird Walk")],
        )
        .unwrap();
        let oracle = PathOracle::new(&g);

        // Members are isolated vertices; all their queries go through the
        // group's location.
        assert_eq!(oracle.path_weight("gate", "finch").unwrap(), 75.0);
        assert_eq!(oracle.path_weight("finch", "owl").unwrap(), 0.0);
        assert!(oracle.path("finch", "owl").unwrap().is_empty());
        assert_eq!(oracle.path("gate", "owl").unwrap().len(), 1);
    }

    #[test]
    fn unreachable_and_unknown() {
        let g = Graph::new(
            vec![
                vertex("gate", VertexKind::Gate, None),
                vertex("island", VertexKind::Exhibit, None),
            ],
            vec![],
        )
        .unwrap();
        let oracle = PathOracle::new(&g);

        assert_eq!(
            oracle.path_weight("gate", "island"),
            Err(Error::Unreachable {
                from: "gate".to_string(),
                to: "island".to_string(),
            })
        );
        assert_eq!(
            oracle.path_weight("gate", "mars"),
            Err(Error::NotFound("mars".to_string()))
        );
    }
}
