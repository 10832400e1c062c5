//! Persistence for the disease catalog.
//!
//! The matching core only ever sees a [`symptom_model::DiseaseCatalog`]
//! value; this crate is where that value comes from and goes back to.

#![deny(unsafe_code)]

mod defaults;
mod repository;

pub use defaults::{DB_PATH_ENV_VAR, DEFAULT_DB_FILE, default_catalog, default_db_path};
pub use repository::{JsonFileStore, MemoryStore, RecordStore};
