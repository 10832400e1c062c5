//! Record stores for loading and saving the disease catalog.
//!
//! # Storage Format
//!
//! A single JSON object keyed by disease name:
//!
//! ```json
//! {
//!   "Influenza": {
//!     "symptoms": ["fever", "cough"],
//!     "description": "...",
//!     "treatment": "..."
//!   }
//! }
//! ```
//!
//! Key order in the file is the catalog order.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use symptom_model::DiseaseCatalog;
use tracing::{debug, info};

use crate::defaults::default_catalog;

/// Source and sink for the whole disease catalog.
///
/// Saves replace the stored catalog wholesale.
pub trait RecordStore {
    fn load(&self) -> Result<DiseaseCatalog>;
    fn save(&self, catalog: &DiseaseCatalog) -> Result<()>;
}

/// Catalog stored as one pretty-printed JSON file.
///
/// Loading a path that does not exist seeds it with [`default_catalog`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn seed(&self) -> Result<DiseaseCatalog> {
        let catalog = default_catalog()?;
        self.save(&catalog)?;
        info!(
            path = %self.path.display(),
            records = catalog.len(),
            "seeded disease catalog"
        );
        Ok(catalog)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<DiseaseCatalog> {
        if !self.path.exists() {
            return self.seed();
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog from {}", self.path.display()))?;
        let catalog: DiseaseCatalog = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog from {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            records = catalog.len(),
            "loaded disease catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &DiseaseCatalog) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write catalog to {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            records = catalog.len(),
            "saved disease catalog"
        );
        Ok(())
    }
}

/// In-process store; nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: Mutex<DiseaseCatalog>,
}

impl MemoryStore {
    pub fn new(catalog: DiseaseCatalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    /// A store holding the seed catalog.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(default_catalog()?))
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<DiseaseCatalog> {
        let guard = self
            .catalog
            .lock()
            .map_err(|_| anyhow!("catalog lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, catalog: &DiseaseCatalog) -> Result<()> {
        let mut guard = self
            .catalog
            .lock()
            .map_err(|_| anyhow!("catalog lock poisoned"))?;
        *guard = catalog.clone();
        Ok(())
    }
}
