//! Job façade (component F).
//!
//! The single entry point the CLI host calls: validate a job request,
//! run the search, and map the result to a success probability.

use tracing::info;

use crate::error::{Endpoint, Error, Result};
use crate::graph::Graph;
use crate::probability::odds_from_best;
use crate::risk::RiskTable;
use crate::search::search;

/// Autonomy must be strictly below this many days. Mirrors the node-count
/// style bound in [`crate::graph::MAX_NODES`]: a generous ceiling that
/// exists to reject malformed input, not to model a real fuel tank.
pub const MAX_AUTONOMY: u32 = 4096;

/// A validated request to compute the odds of a courier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    pub autonomy: u32,
    pub origin: String,
    pub destination: String,
    pub countdown: u32,
}

impl JobParams {
    /// Validate and construct a job request.
    ///
    /// Rejects zero or out-of-range autonomy and empty planet names, per
    /// the documented `ConfigurationRejected` conditions.
    pub fn new(
        autonomy: u32,
        origin: impl Into<String>,
        destination: impl Into<String>,
        countdown: u32,
    ) -> Result<Self> {
        if autonomy == 0 || autonomy >= MAX_AUTONOMY {
            return Err(Error::ConfigurationRejected {
                message: format!(
                    "autonomy must be in 1..{MAX_AUTONOMY}, got {autonomy}"
                ),
            });
        }
        let origin = origin.into();
        let destination = destination.into();
        if origin.is_empty() {
            return Err(Error::ConfigurationRejected {
                message: "origin must not be empty".to_string(),
            });
        }
        if destination.is_empty() {
            return Err(Error::ConfigurationRejected {
                message: "destination must not be empty".to_string(),
            });
        }

        Ok(Self {
            autonomy,
            origin,
            destination,
            countdown,
        })
    }
}

/// Compute the probability of completing `params` within its countdown.
///
/// Pure and idempotent over its inputs: running it twice with the same
/// `params`, `graph`, and `risk_table` returns the same value.
pub fn solve(params: &JobParams, graph: &Graph, risk_table: &RiskTable) -> Result<f64> {
    if !graph.contains(&params.origin) {
        return Err(Error::GraphMissingEndpoint {
            endpoint: Endpoint::Origin,
            name: params.origin.clone(),
        });
    }
    if !graph.contains(&params.destination) {
        return Err(Error::GraphMissingEndpoint {
            endpoint: Endpoint::Destination,
            name: params.destination.clone(),
        });
    }

    let best = search(
        graph,
        risk_table,
        &params.origin,
        &params.destination,
        params.autonomy,
        params.countdown,
    );
    let odds = odds_from_best(&best);
    info!(odds, reachable = best.is_reachable(), "job solved");
    Ok(odds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, RouteRecord};
    use crate::risk::build_risk_table;

    #[test]
    fn rejects_zero_autonomy() {
        let err = JobParams::new(0, "X", "Y", 5).unwrap_err();
        assert!(matches!(err, Error::ConfigurationRejected { .. }));
    }

    #[test]
    fn rejects_autonomy_at_the_ceiling() {
        let err = JobParams::new(MAX_AUTONOMY, "X", "Y", 5).unwrap_err();
        assert!(matches!(err, Error::ConfigurationRejected { .. }));
    }

    #[test]
    fn rejects_empty_origin() {
        let err = JobParams::new(6, "", "Y", 5).unwrap_err();
        assert!(matches!(err, Error::ConfigurationRejected { .. }));
    }

    #[test]
    fn rejects_empty_destination() {
        let err = JobParams::new(6, "X", "", 5).unwrap_err();
        assert!(matches!(err, Error::ConfigurationRejected { .. }));
    }

    #[test]
    fn unknown_origin_is_rejected_at_solve_time() {
        let graph = build_graph([RouteRecord::new("X", "Y", 2)]).unwrap();
        let risk = build_risk_table([]);
        let params = JobParams::new(6, "nowhere", "Y", 5).unwrap();
        let err = solve(&params, &graph, &risk).unwrap_err();
        assert!(matches!(
            err,
            Error::GraphMissingEndpoint {
                endpoint: Endpoint::Origin,
                ..
            }
        ));
    }

    #[test]
    fn unknown_destination_is_rejected_at_solve_time() {
        let graph = build_graph([RouteRecord::new("X", "Y", 2)]).unwrap();
        let risk = build_risk_table([]);
        let params = JobParams::new(6, "X", "nowhere", 5).unwrap();
        let err = solve(&params, &graph, &risk).unwrap_err();
        assert!(matches!(
            err,
            Error::GraphMissingEndpoint {
                endpoint: Endpoint::Destination,
                ..
            }
        ));
    }

    #[test]
    fn solves_a_direct_safe_route() {
        let graph = build_graph([RouteRecord::new("X", "Y", 2)]).unwrap();
        let risk = build_risk_table([]);
        let params = JobParams::new(6, "X", "Y", 5).unwrap();
        assert_eq!(solve(&params, &graph, &risk).unwrap(), 1.0);
    }
}
