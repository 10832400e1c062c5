//! Insertion-ordered disease catalog.
//!
//! The catalog maps disease names to records and remembers the order in which
//! names were first seen. That order is observable: ranking ties are broken by
//! catalog order, and the persisted JSON object is written back in the same
//! order it was read.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::record::DiseaseRecord;

/// Disease name to record mapping with stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseCatalog {
    entries: Vec<(String, DiseaseRecord)>,
    index: BTreeMap<String, usize>,
}

impl DiseaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&DiseaseRecord> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiseaseRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names in lexical order, for listings.
    pub fn sorted_names(&self) -> Vec<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// Add a new disease.
    ///
    /// The name is trimmed before use. Fails on an empty name or when the
    /// name is already present; existing records are never touched.
    pub fn insert(&mut self, name: impl Into<String>, record: DiseaseRecord) -> Result<()> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.contains(&name) {
            return Err(ModelError::DuplicateName(name));
        }
        self.push(name, record);
        Ok(())
    }

    /// Replace a record wholesale, or append it when absent.
    ///
    /// A replaced record keeps its position. Returns the previous record.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        record: DiseaseRecord,
    ) -> Result<Option<DiseaseRecord>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(self.upsert(name, record))
    }

    fn upsert(&mut self, name: String, record: DiseaseRecord) -> Option<DiseaseRecord> {
        match self.index.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, record)),
            None => {
                self.push(name, record);
                None
            }
        }
    }

    fn push(&mut self, name: String, record: DiseaseRecord) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, record));
    }
}

impl Serialize for DiseaseCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = DiseaseCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object mapping disease names to records")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = DiseaseCatalog::new();
        while let Some((name, record)) = access.next_entry::<String, DiseaseRecord>()? {
            if name.trim().is_empty() {
                return Err(serde::de::Error::custom(ModelError::EmptyName));
            }
            // Later duplicates win but keep the first position.
            catalog.upsert(name, record);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for DiseaseCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
