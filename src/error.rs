//! Graph error types.
//!
//! Every failure in this crate is local and synchronous: the operation that
//! returns an error has not mutated anything. Inputs that are merely no-ops
//! (adding a tree arc from an unknown source, removing an absent edge) are not
//! errors; those operations report `false` instead.

use thiserror::Error;

/// Errors returned by fallible graph, edge and tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// An edge was constructed with two equal endpoints.
    #[error("an edge cannot connect a vertex to itself")]
    InvalidEdge,

    /// `connect_graph` was called with a bridge that has no endpoint in one of
    /// the two graphs.
    #[error("one vertex of the bridge must be present in the {side} graph to connect graphs")]
    DisjointConnection {
        /// Which graph is missing an anchor vertex.
        side: ConnectionSide,
    },

    /// Removal of a tree's root vertex was requested.
    #[error("cannot remove the root vertex of a tree")]
    RootRemoval,
}

/// Identifies the graph that lacked an anchor in a failed connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionSide {
    /// The graph `connect_graph` was called on.
    Existing,
    /// The graph passed in to be merged.
    Incoming,
}

impl core::fmt::Display for ConnectionSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Existing => f.write_str("existing"),
            Self::Incoming => f.write_str("incoming"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
