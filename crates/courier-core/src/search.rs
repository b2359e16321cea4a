//! Search engine (component D).
//!
//! Dynamic-programming expansion over `(day, planet)` producing a per-day
//! reachability table and the best [`PathStats`] reachable at the
//! destination within the countdown. This is a time-expanded shortest-path
//! search with an auxiliary resource (remaining autonomy) that the wait
//! self-loop resets.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::Graph;
use crate::risk::RiskTable;
use crate::stats::{self, PathStats};

/// Run the search and return the best (lowest-risk, then fastest, then
/// best-rested) [`PathStats`] reachable at `destination` within
/// `countdown` days, given `autonomy` days of fuel per leg between
/// refuels.
///
/// Callers are expected to have already checked that `origin` and
/// `destination` are nodes of `graph` (see [`crate::job::solve`]).
pub fn search(
    graph: &Graph,
    risk_table: &RiskTable,
    origin: &str,
    destination: &str,
    autonomy: u32,
    countdown: u32,
) -> PathStats {
    // reach[d] holds the single non-dominated PathStats for reaching each
    // planet exactly on day d; missing key == unreachable that day.
    let mut reach: Vec<HashMap<String, PathStats>> = Vec::with_capacity(countdown as usize + 1);

    let day_zero_risk = u64::from(risk_table.is_risky(origin, 0));
    let mut day_zero = HashMap::new();
    day_zero.insert(
        origin.to_string(),
        PathStats {
            risk: day_zero_risk,
            total_elapsed: 0,
            remaining_autonomy: autonomy,
        },
    );
    reach.push(day_zero);

    let mut best_at_destination = PathStats::UNREACHABLE;
    if let Some(day_zero_stats) = reach[0].get(destination) {
        best_at_destination = stats::min(best_at_destination, *day_zero_stats);
    }

    for day in 1..=countdown {
        let mut frontier: HashMap<String, PathStats> = HashMap::new();

        for dst in graph.nodes() {
            let mut best_candidate = PathStats::UNREACHABLE;

            for (src, weight) in graph.neighbours(dst) {
                if u32::try_from(day).unwrap_or(u32::MAX) < weight {
                    continue;
                }
                let predecessor_day = (day - weight) as usize;
                let Some(predecessor) = reach[predecessor_day].get(src) else {
                    continue;
                };

                let is_wait = src == dst;
                let available_autonomy = if is_wait {
                    autonomy
                } else {
                    predecessor.remaining_autonomy
                };
                if !is_wait && available_autonomy < weight {
                    continue;
                }

                let risky = u64::from(risk_table.is_risky(dst, u64::from(day)));
                let candidate = PathStats {
                    risk: predecessor.risk + risky,
                    total_elapsed: predecessor.total_elapsed + u64::from(weight),
                    remaining_autonomy: if is_wait {
                        autonomy
                    } else {
                        available_autonomy - weight
                    },
                };
                best_candidate = stats::min(best_candidate, candidate);
            }

            if best_candidate.is_reachable() && best_candidate < best_at_destination {
                frontier.insert(dst.to_string(), best_candidate);
            }
        }

        if let Some(destination_stats) = frontier.get(destination) {
            best_at_destination = stats::min(best_at_destination, *destination_stats);
        }

        reach.push(frontier);

        if best_at_destination.is_reachable() && best_at_destination.risk == 0 {
            debug!(day, "zero-risk result found, no later day can improve it");
            break;
        }
    }

    best_at_destination
}
