use thiserror::Error;

/// Convenient result alias for the courier routing core.
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a job request failed to resolve against the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Top-level error type for the courier routing core.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration field was out of range, missing, or malformed.
    #[error("configuration rejected: {message}")]
    ConfigurationRejected { message: String },

    /// The graph would contain at least `MAX_NODES` nodes.
    #[error("input too large: {node_count} nodes meets or exceeds the {limit} node limit")]
    InputTooLarge { node_count: usize, limit: usize },

    /// The job's origin or destination is not a node in the graph.
    #[error("{endpoint} {name:?} is not present in the graph")]
    GraphMissingEndpoint { endpoint: Endpoint, name: String },

    /// The route store collaborator failed to deliver routes.
    #[error("route store failure: {message}")]
    RouteStoreFailure { message: String },
}
