// SPDX-License-Identifier: MIT

use std::collections::btree_map::BTreeMap;

use crate::{Edge, Error, Vertex, VertexKind};

/// Represents a venue's path network as a set of [Vertices](Vertex)
/// connected by undirected [Edges](Edge).
///
/// Built once per session from externally supplied vertex and edge lists,
/// and immutable afterwards. Construction validates every cross-reference
/// (edge endpoints, group memberships, the single gate vertex), so lookups
/// with ids taken from the graph itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: BTreeMap<String, Vertex>,
    edges: Vec<Edge>,
    edge_ids: BTreeMap<String, usize>,
    adjacency: BTreeMap<String, Vec<usize>>,
    gate_id: String,
}

impl Graph {
    /// Builds a graph from vertex and edge lists.
    ///
    /// Validates that ids are unique, that every edge endpoint and every
    /// `group_id` resolves, that weights are non-negative, and that exactly
    /// one [VertexKind::Gate] vertex exists.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, Error> {
        let mut vertex_map: BTreeMap<String, Vertex> = BTreeMap::new();
        for vertex in vertices {
            if vertex_map.contains_key(&vertex.id) {
                return Err(Error::DuplicateId(vertex.id));
            }
            vertex_map.insert(vertex.id.clone(), vertex);
        }

        let mut gate_id = None;
        for vertex in vertex_map.values() {
            if vertex.kind == VertexKind::Gate {
                if gate_id.is_some() {
                    return Err(Error::NoSingleGate);
                }
                gate_id = Some(vertex.id.clone());
            }

            if let Some(group) = &vertex.group_id {
                let resolves = vertex_map
                    .get(group)
                    .is_some_and(|g| g.kind == VertexKind::ExhibitGroup);
                if !resolves {
                    return Err(Error::BadGroup {
                        vertex: vertex.id.clone(),
                        group: group.clone(),
                    });
                }
            }
        }
        let gate_id = gate_id.ok_or(Error::NoSingleGate)?;

        let mut edge_ids = BTreeMap::new();
        let mut adjacency: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, edge) in edges.iter().enumerate() {
            if edge_ids.insert(edge.id.clone(), index).is_some() {
                return Err(Error::DuplicateId(edge.id.clone()));
            }
            if !(edge.weight >= 0.0) {
                return Err(Error::BadWeight(edge.id.clone()));
            }
            for endpoint in [&edge.endpoint_a, &edge.endpoint_b] {
                if !vertex_map.contains_key(endpoint) {
                    return Err(Error::DanglingEndpoint {
                        edge: edge.id.clone(),
                        vertex: endpoint.clone(),
                    });
                }
                adjacency.entry(endpoint.clone()).or_default().push(index);
            }
        }

        Ok(Self {
            vertices: vertex_map,
            edges,
            edge_ids,
            adjacency,
            gate_id,
        })
    }

    /// Returns the number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all [Vertices](Vertex) in the graph.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Retrieves the [Vertex] with the provided id.
    pub fn vertex(&self, id: &str) -> Result<&Vertex, Error> {
        self.vertices
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Retrieves the [Edge] with the provided id.
    pub fn edge(&self, id: &str) -> Result<&Edge, Error> {
        self.edge_ids
            .get(id)
            .map(|&index| &self.edges[index])
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Returns all [Edges](Edge) incident to a vertex, in input order.
    pub fn edges_at<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> {
        self.adjacent(id).iter().map(move |&index| &self.edges[index])
    }

    /// The venue's single gate/exit vertex, used as the end-of-route waypoint.
    pub fn gate(&self) -> &Vertex {
        // gate_id is validated at construction
        &self.vertices[&self.gate_id]
    }

    /// Resolves an id to its distance-query representative: the owning
    /// exhibit group if the vertex is a group member, the vertex itself
    /// otherwise.
    ///
    /// Every component performing distance or path queries goes through
    /// this single resolver, so group aliasing cannot be forgotten at a
    /// call site.
    pub fn resolve<'a>(&'a self, id: &'a str) -> Result<&'a str, Error> {
        match &self.vertex(id)?.group_id {
            Some(group) => Ok(group),
            None => Ok(id),
        }
    }

    pub(crate) fn adjacent(&self, id: &str) -> &[usize] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn edge_at(&self, index: usize) -> &Edge {
        &self.edges[index]
    }
}
