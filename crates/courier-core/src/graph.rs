//! Graph builder (component A).
//!
//! Turns a stream of undirected route records into an adjacency map with a
//! mandatory self-loop of weight [`WAIT`] on every node — the "wait one day
//! to refuel" action the search engine treats as an ordinary edge.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

/// Node-count bound: the resulting graph must have strictly fewer nodes
/// than this.
pub const MAX_NODES: usize = 2048;

/// Weight of the wait/refuel self-loop, in days.
pub const WAIT: u32 = 1;

/// A single undirected route between two planets.
///
/// Construction is trusted: the collaborator that produces route records
/// (the routes store, out of scope for this crate) is responsible for
/// supplying non-empty planet names and a positive `travel_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub travel_time: u32,
}

impl RouteRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        travel_time: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            travel_time,
        }
    }
}

/// Adjacency map satisfying the documented invariants: every node has a
/// `WAIT`-weight self-loop, edges are symmetric, and duplicate edges have
/// been collapsed ("last record wins").
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, HashMap<String, u32>>,
}

impl Graph {
    /// Whether `node` is present in the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over every node in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbours of `node`, including the `WAIT`-weight self-loop, as
    /// `(neighbour, weight)` pairs. Empty for an unknown node.
    pub fn neighbours(&self, node: &str) -> impl Iterator<Item = (&str, u32)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, weight)| (target.as_str(), *weight)))
    }

    /// Weight of the edge between `a` and `b`, if one exists.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        self.adjacency.get(a).and_then(|edges| edges.get(b)).copied()
    }
}

/// Build the routing graph from a stream of undirected route records.
///
/// Duplicate `(origin, destination)` pairs overwrite the previously stored
/// weight ("last record wins" — an explicit, frozen policy).
/// After ingestion, a `WAIT`-weight self-loop is inserted for every node
/// observed. Fails with [`Error::InputTooLarge`] if the resulting node count
/// meets or exceeds [`MAX_NODES`].
pub fn build_graph(records: impl IntoIterator<Item = RouteRecord>) -> Result<Graph> {
    let mut adjacency: HashMap<String, HashMap<String, u32>> = HashMap::new();
    let mut duplicate_edges = 0usize;

    for record in records {
        let forward = adjacency
            .entry(record.origin.clone())
            .or_default()
            .insert(record.destination.clone(), record.travel_time);
        let backward = adjacency
            .entry(record.destination.clone())
            .or_default()
            .insert(record.origin.clone(), record.travel_time);

        if forward.is_some() || backward.is_some() {
            duplicate_edges += 1;
        }
    }

    if duplicate_edges > 0 {
        debug!(duplicate_edges, "overwrote duplicate route records");
    }

    let node_count = adjacency.len();
    if node_count >= MAX_NODES {
        return Err(Error::InputTooLarge {
            node_count,
            limit: MAX_NODES,
        });
    }

    let nodes: Vec<String> = adjacency.keys().cloned().collect();
    for node in nodes {
        adjacency.entry(node.clone()).or_default().insert(node, WAIT);
    }

    debug!(node_count, "built routing graph");
    Ok(Graph { adjacency })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_gets_a_wait_self_loop() {
        let graph = build_graph([RouteRecord::new("X", "Y", 2)]).unwrap();
        assert_eq!(graph.weight("X", "X"), Some(WAIT));
        assert_eq!(graph.weight("Y", "Y"), Some(WAIT));
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = build_graph([RouteRecord::new("X", "Y", 3)]).unwrap();
        assert_eq!(graph.weight("X", "Y"), Some(3));
        assert_eq!(graph.weight("Y", "X"), Some(3));
    }

    #[test]
    fn duplicate_edge_last_write_wins() {
        let graph = build_graph([
            RouteRecord::new("X", "Y", 2),
            RouteRecord::new("X", "Y", 5),
        ])
        .unwrap();
        assert_eq!(graph.weight("X", "Y"), Some(5));
        assert_eq!(graph.weight("Y", "X"), Some(5));
    }

    #[test]
    fn self_loop_route_record_is_overwritten_by_mandatory_wait() {
        let graph = build_graph([
            RouteRecord::new("X", "Y", 2),
            RouteRecord::new("X", "X", 1),
        ])
        .unwrap();
        assert_eq!(graph.weight("X", "X"), Some(WAIT));
    }

    #[test]
    fn too_many_nodes_is_rejected() {
        let records = (0..MAX_NODES).map(|i| RouteRecord::new(format!("n{i}"), "hub", 1));
        let err = build_graph(records).unwrap_err();
        assert!(matches!(err, Error::InputTooLarge { .. }));
    }

    #[test]
    fn node_count_under_limit_is_accepted() {
        let records = (0..MAX_NODES - 2).map(|i| RouteRecord::new(format!("n{i}"), "hub", 1));
        let graph = build_graph(records).unwrap();
        assert_eq!(graph.node_count(), MAX_NODES - 1);
    }
}
