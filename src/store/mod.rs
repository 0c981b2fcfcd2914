//! State Layer Module
//!
//! Holds all shared state the request handlers operate on.
//!
//! ## Core Concepts
//! - **Record store**: `ScenarioStore` keeps the indexed scenario records in a
//!   concurrent map keyed by name, which makes the name-uniqueness insert atomic.
//! - **File store**: `BundleStore` owns the on-disk layout (`scenarios/<uuid>/`)
//!   and writes the uploaded bundle files byte-for-byte.
//! - **Bootstrap**: `bootstrap` is the idempotent startup migration. It checks for
//!   the bundle directory before creating it and leaves no global state behind.

pub mod files;
pub mod records;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

/// Ensures the on-disk layout exists before the server starts accepting uploads.
///
/// Safe to run on every start: an already provisioned data directory is left
/// untouched and nothing is logged for it.
pub fn bootstrap(data_dir: &Path) -> std::io::Result<PathBuf> {
    let scenarios_dir = data_dir.join("scenarios");
    if scenarios_dir.is_dir() {
        return Ok(scenarios_dir);
    }

    std::fs::create_dir_all(&scenarios_dir)?;
    tracing::info!("Created scenario bundle directory at {}", scenarios_dir.display());
    Ok(scenarios_dir)
}
