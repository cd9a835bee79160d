// SPDX-License-Identifier: MIT

/// Error conditions surfaced by the planning and progress operations.
///
/// All failures are returned as explicit values; the crate never makes
/// recovery decisions (such as whether to reroute) on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A referenced vertex or edge id does not exist in the [Graph](crate::Graph).
    /// Construction-time caller error, never silently swallowed.
    #[error("no such vertex or edge: {0}")]
    NotFound(String),

    /// No path exists between two vertices. Fatal for plan construction:
    /// the target set is assumed fully reachable from the start, and no
    /// partial plan is attempted.
    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    /// Advance past the final waypoint. Recoverable, "nothing to do".
    #[error("already at the end of the route")]
    AtEnd,

    /// Retreat before the first waypoint. Recoverable, "nothing to do".
    #[error("nothing visited yet to return to")]
    AtStart,

    /// Two vertices or two edges share an id.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// An edge references an endpoint missing from the vertex list.
    #[error("edge {edge} references unknown vertex {vertex}")]
    DanglingEndpoint { edge: String, vertex: String },

    /// A vertex's `group_id` does not resolve to an exhibit-group vertex.
    #[error("vertex {vertex} references invalid exhibit group {group}")]
    BadGroup { vertex: String, group: String },

    /// An edge's weight is negative or not a number.
    #[error("edge {0} has an invalid weight")]
    BadWeight(String),

    /// The vertex list does not contain exactly one gate vertex, so no
    /// end-of-route waypoint can be designated.
    #[error("graph must contain exactly one gate vertex")]
    NoSingleGate,
}
