// SPDX-License-Identifier: MIT

//! Walking-tour planning over fixed point-of-interest networks.
//!
//! `tourex` takes a weighted undirected graph of venue locations, a set of
//! must-visit stops and a start location, and produces a visiting order with
//! cumulative distances and human-readable turn-by-turn directions. The plan
//! adapts as the walker moves: off-track detection, rerouting of the
//! unvisited tail, and skipping of the next stop.
//!
//! The visiting order is built with a greedy nearest-neighbor heuristic over
//! shortest-path distances, not an optimal TSP solution. Stops may belong to
//! an exhibit group sharing one physical location; all distance and path
//! queries are transparently aliased to the group's vertex.
//!
//! # Example
//!
//! ```
//! use tourex::{Edge, Graph, Route, Vertex, VertexKind};
//!
//! let graph = Graph::new(
//!     vec![
//!         Vertex {
//!             id: "gate".into(),
//!             kind: VertexKind::Gate,
//!             name: "Entrance Gate".into(),
//!             group_id: None,
//!             lat: 0.0,
//!             lng: 0.0,
//!             tags: vec![],
//!         },
//!         Vertex {
//!             id: "lions".into(),
//!             kind: VertexKind::Exhibit,
//!             name: "Lions".into(),
//!             group_id: None,
//!             lat: 0.0,
//!             lng: 1.0,
//!             tags: vec![],
//!         },
//!     ],
//!     vec![Edge {
//!         id: "e0".into(),
//!         endpoint_a: "gate".into(),
//!         endpoint_b: "lions".into(),
//!         weight: 120.0,
//!         street: "Cat Corner".into(),
//!     }],
//! )?;
//!
//! let mut route = Route::plan(&graph, &["lions"], "gate")?;
//! let steps = route.advance("gate")?;
//! assert_eq!(
//!     steps[0].to_string(),
//!     "Proceed on Cat Corner 120 ft towards Lions Exhibit",
//! );
//! # Ok::<(), tourex::Error>(())
//! ```

pub mod data;
mod directions;
mod error;
mod graph;
mod path;
mod route;

pub use directions::{collate, merge_same_street, DirectionStep};
pub use error::Error;
pub use graph::Graph;
pub use path::PathOracle;
pub use route::{Route, Waypoint};

use serde::{Deserialize, Serialize};

/// Classifies a [Vertex] within the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    /// The venue's entrance/exit. A [Graph] must contain exactly one.
    Gate,

    /// A visitable point of interest.
    Exhibit,

    /// A junction of streets, never a tour stop by itself.
    Intersection,

    /// A cluster of exhibits sharing one physical location. Members point
    /// at the group through their `group_id`, and all distance queries
    /// involving a member are computed against the group vertex instead.
    ExhibitGroup,
}

/// A location in the venue's path network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: String,
    pub kind: VertexKind,
    pub name: String,

    /// Id of the [VertexKind::ExhibitGroup] vertex this vertex is a member
    /// of, if any. Must resolve to an existing exhibit-group vertex.
    #[serde(default)]
    pub group_id: Option<String>,

    pub lat: f32,
    pub lng: f32,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// An undirected street segment between two vertices.
///
/// There is no privileged source or target; callers walking a path must
/// disambiguate "the other end" against a known current location, see
/// [Edge::other_endpoint]. Parallel edges between the same vertex pair are
/// permitted and distinguished by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub endpoint_a: String,
    pub endpoint_b: String,

    /// Physical distance in feet. Must be non-negative.
    pub weight: f64,

    pub street: String,
}

impl Edge {
    /// Returns the endpoint which is not `id`.
    ///
    /// If `id` is neither endpoint, `endpoint_a` is returned; callers are
    /// expected to only ask about edges incident to `id`.
    pub fn other_endpoint(&self, id: &str) -> &str {
        if self.endpoint_a == id {
            &self.endpoint_b
        } else {
            &self.endpoint_a
        }
    }
}
