use std::path::PathBuf;

use anyhow::{Context, Result};
use symptom_model::DiseaseCatalog;

/// Environment variable overriding the catalog location.
pub const DB_PATH_ENV_VAR: &str = "SYMPTOM_DB_PATH";

/// Catalog file name used when no path is configured.
pub const DEFAULT_DB_FILE: &str = "diseases.json";

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/default_diseases.json");

/// Catalog location: `$SYMPTOM_DB_PATH`, else `diseases.json` in the
/// working directory.
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DB_FILE)
}

/// The catalog seeded on first run.
pub fn default_catalog() -> Result<DiseaseCatalog> {
    serde_json::from_str(DEFAULT_CATALOG_JSON).context("parse built-in disease catalog")
}
