// SPDX-License-Identifier: MIT

//! Loading of vertex and edge lists from JSON.
//!
//! The engine itself consumes already-parsed data; this module is the thin
//! input boundary for callers holding the venue's data files. Vertices are a
//! JSON array of `{id, kind, name, group_id?, lat, lng, tags?}` objects,
//! edges an array of `{id, endpoint_a, endpoint_b, weight, street}` objects.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::{Edge, Graph, Vertex};

/// Error conditions which may occur while loading graph data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The lists parsed, but failed [Graph] construction validation.
    #[error(transparent)]
    Graph(#[from] crate::Error),
}

/// Parses a vertex list from a reader.
pub fn vertices_from_io<R: io::Read>(reader: R) -> Result<Vec<Vertex>, DataError> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

/// Parses an edge list from a reader.
pub fn edges_from_io<R: io::Read>(reader: R) -> Result<Vec<Edge>, DataError> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

/// Loads and validates a [Graph] from vertex and edge list files.
pub fn graph_from_files<P, Q>(vertex_path: P, edge_path: Q) -> Result<Graph, DataError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let vertices = vertices_from_io(File::open(vertex_path)?)?;
    let edges = edges_from_io(File::open(edge_path)?)?;
    Ok(Graph::new(vertices, edges)?)
}
