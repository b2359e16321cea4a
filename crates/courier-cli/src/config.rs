//! Case-insensitive JSON configuration loading.
//!
//! Field names in the falcon and communication files are matched without
//! regard to case, matching the loosely-typed JSON the mission control
//! tooling this CLI interoperates with actually emits.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key.to_lowercase(), lowercase_keys(val)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

/// Read `path` as JSON, lower-case every object key recursively, then
/// deserialize into `T`. Unknown fields are rejected by `T`'s own
/// `#[serde(deny_unknown_fields)]`, so this only loosens case, not shape.
pub fn read_case_insensitive<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    serde_json::from_value(lowercase_keys(value))
        .with_context(|| format!("{} does not match the expected shape", path.display()))
}

/// The falcon's mission parameters: fuel autonomy, endpoints, and the
/// routes database to plan against.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FalconConfig {
    #[serde(default = "default_autonomy")]
    pub autonomy: u32,
    #[serde(default = "default_departure")]
    pub departure: String,
    #[serde(default = "default_arrival")]
    pub arrival: String,
    pub routes_db: PathBuf,
}

fn default_autonomy() -> u32 {
    1
}

fn default_departure() -> String {
    "Tatooine".to_string()
}

fn default_arrival() -> String {
    "Endor".to_string()
}

/// A single bounty-hunter sighting as read from the communication file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BountyHunterRecord {
    pub planet: String,
    pub day: u64,
}

/// Intercepted rebel intelligence: the countdown to hyperspace jump and
/// every known bounty-hunter sighting along the way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommunicationConfig {
    #[serde(default)]
    pub countdown: u32,
    #[serde(default)]
    pub bounty_hunters: Vec<BountyHunterRecord>,
}
