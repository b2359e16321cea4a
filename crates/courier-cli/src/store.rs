//! SQLite-backed routes store.
//!
//! Reads the `routes(origin, destination, travel_time)` table produced by
//! the mission database and hands each row to the core as a
//! [`RouteRecord`].

use std::path::Path;

use courier_core::{Error, Result, RouteRecord};
use rusqlite::Connection;

/// Load every route in `db_path`'s `routes` table.
///
/// Any SQLite failure is reported as [`Error::RouteStoreFailure`] — the
/// core's own vocabulary for "the collaborator could not deliver routes".
pub fn load_routes(db_path: &Path) -> Result<Vec<RouteRecord>> {
    let connection = Connection::open(db_path).map_err(route_store_failure)?;

    let mut statement = connection
        .prepare("SELECT origin, destination, travel_time FROM routes")
        .map_err(route_store_failure)?;

    let rows = statement
        .query_map([], |row| {
            let origin: String = row.get(0)?;
            let destination: String = row.get(1)?;
            let travel_time: u32 = row.get(2)?;
            Ok(RouteRecord::new(origin, destination, travel_time))
        })
        .map_err(route_store_failure)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(route_store_failure)?);
    }
    Ok(records)
}

fn route_store_failure(err: rusqlite::Error) -> Error {
    Error::RouteStoreFailure {
        message: err.to_string(),
    }
}
