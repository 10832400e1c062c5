use serde::{Deserialize, Serialize};

use crate::record::DiseaseRecord;

/// A ranked candidate produced by one identify call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Disease name (catalog key).
    pub name: String,
    /// Confidence percentage in `[0, 100]`, rounded to one decimal place.
    pub confidence_percent: f64,
    /// The matched record, cloned from the catalog.
    pub record: DiseaseRecord,
}
