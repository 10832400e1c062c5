//! Stored disease records.

use serde::{Deserialize, Serialize};

/// One disease's symptom set plus descriptive metadata.
///
/// Symptoms are kept exactly as authored; normalization happens at match time.
/// Every field is defaulted so records written by hand (or by older tools)
/// that omit a field still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Symptoms as authored, in authoring order.
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Short description of the condition.
    #[serde(default)]
    pub description: String,
    /// Common treatment or advice.
    #[serde(default)]
    pub treatment: String,
}

impl DiseaseRecord {
    pub fn new(
        symptoms: Vec<String>,
        description: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            symptoms,
            description: description.into(),
            treatment: treatment.into(),
        }
    }

    /// Record with symptoms only; description and treatment left empty.
    pub fn with_symptoms<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Splits a comma-separated symptom list the way users type it.
    ///
    /// Entries are trimmed and empty entries dropped; casing and punctuation
    /// are preserved.
    pub fn parse_symptom_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Symptoms joined for display.
    pub fn symptom_summary(&self) -> String {
        self.symptoms.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let record: DiseaseRecord = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
        assert!(record.symptoms.is_empty());
        assert_eq!(record.description, "x");
        assert_eq!(record.treatment, "");
    }

    #[test]
    fn parse_symptom_list_trims_and_drops_empty() {
        let parsed = DiseaseRecord::parse_symptom_list(" Fever , ,Sore Throat,");
        assert_eq!(parsed, vec!["Fever", "Sore Throat"]);
    }
}
