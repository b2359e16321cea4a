//! Risk table (component B).
//!
//! Maps a planet to the set of days on which a bounty hunter is known to be
//! present there. A hunter sighting on a planet absent from the graph is
//! inert: it is simply never looked up by the search engine.

use std::collections::{HashMap, HashSet};

use tracing::debug;

/// A single bounty-hunter sighting: present on `planet` on `day`.
///
/// Construction is trusted the same way [`crate::graph::RouteRecord`] is —
/// the communication parser (out of scope for this crate) is responsible
/// for non-empty planet names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterSighting {
    pub planet: String,
    pub day: u64,
}

impl HunterSighting {
    pub fn new(planet: impl Into<String>, day: u64) -> Self {
        Self {
            planet: planet.into(),
            day,
        }
    }
}

/// `planet -> set of days` a hunter is present there. Absence of a planet
/// means no risk anywhere on that planet; absence of a day for a present
/// planet means no risk on that day.
#[derive(Debug, Clone, Default)]
pub struct RiskTable {
    sightings: HashMap<String, HashSet<u64>>,
}

impl RiskTable {
    /// Whether a hunter is present on `planet` on `day`.
    pub fn is_risky(&self, planet: &str, day: u64) -> bool {
        self.sightings
            .get(planet)
            .map(|days| days.contains(&day))
            .unwrap_or(false)
    }
}

/// Build the risk table from a stream of hunter sightings. Duplicate
/// entries collapse; no validation is performed against the graph.
pub fn build_risk_table(sightings: impl IntoIterator<Item = HunterSighting>) -> RiskTable {
    let mut map: HashMap<String, HashSet<u64>> = HashMap::new();
    for sighting in sightings {
        map.entry(sighting.planet).or_default().insert(sighting.day);
    }
    debug!(planets = map.len(), "built risk table");
    RiskTable { sightings: map }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_planet_is_never_risky() {
        let table = build_risk_table([HunterSighting::new("Y", 2)]);
        assert!(!table.is_risky("Z", 2));
    }

    #[test]
    fn known_planet_unknown_day_is_not_risky() {
        let table = build_risk_table([HunterSighting::new("Y", 2)]);
        assert!(!table.is_risky("Y", 3));
    }

    #[test]
    fn known_planet_known_day_is_risky() {
        let table = build_risk_table([HunterSighting::new("Y", 2)]);
        assert!(table.is_risky("Y", 2));
    }

    #[test]
    fn duplicate_sightings_collapse() {
        let table = build_risk_table([HunterSighting::new("Y", 2), HunterSighting::new("Y", 2)]);
        assert!(table.is_risky("Y", 2));
    }
}
