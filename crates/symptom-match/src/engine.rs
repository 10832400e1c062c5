//! Ranking diseases for a free-text symptom query.

use symptom_model::{DiseaseCatalog, MatchResult};
use tracing::{debug, trace};

use crate::parse::parse_symptoms;
use crate::score::{Scorer, SymptomScore};
use crate::similarity::{IndelRatio, Similarity};

/// Result cap and confidence floor for one identify call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentifyOptions {
    /// Maximum number of results returned (default: 5).
    pub top_n: usize,
    /// Minimum raw confidence, on the `0.0..=1.0` scale (default: 0.05).
    pub min_confidence: f64,
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_confidence: 0.05,
        }
    }
}

impl IdentifyOptions {
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

/// A ranked result together with the score that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub result: MatchResult,
    pub score: SymptomScore,
}

/// Scores every catalog record against a query and ranks the candidates.
///
/// Ranking is by rounded confidence, descending. Records with equal
/// confidence keep catalog order, so the catalog's insertion order is the
/// tie-break contract.
#[derive(Debug, Clone, Default)]
pub struct Identifier<S = IndelRatio> {
    scorer: Scorer<S>,
    options: IdentifyOptions,
}

impl Identifier<IndelRatio> {
    pub fn new(options: IdentifyOptions) -> Self {
        Self {
            scorer: Scorer::new(),
            options,
        }
    }
}

impl<S: Similarity> Identifier<S> {
    pub fn with_scorer(scorer: Scorer<S>, options: IdentifyOptions) -> Self {
        Self { scorer, options }
    }

    /// Ranked matches for `query_text`.
    ///
    /// Returns an empty list when the query has no usable tokens or nothing
    /// reaches the confidence floor.
    pub fn identify(&self, catalog: &DiseaseCatalog, query_text: &str) -> Vec<MatchResult> {
        self.identify_with_scores(catalog, query_text)
            .into_iter()
            .map(|scored| scored.result)
            .collect()
    }

    /// Same as [`Self::identify`] but keeps each result's score breakdown.
    pub fn identify_with_scores(
        &self,
        catalog: &DiseaseCatalog,
        query_text: &str,
    ) -> Vec<ScoredMatch> {
        let query = parse_symptoms(query_text);
        if query.is_empty() {
            debug!("query has no symptom tokens");
            return Vec::new();
        }

        let mut ranked: Vec<ScoredMatch> = Vec::new();
        for (name, record) in catalog.iter() {
            let score = self.scorer.score(&query, &record.symptoms);
            trace!(
                disease = name,
                matched_weight = score.matched_weight,
                confidence = score.confidence,
                "scored disease"
            );
            if score.confidence < self.options.min_confidence {
                continue;
            }
            ranked.push(ScoredMatch {
                result: MatchResult {
                    name: name.to_string(),
                    confidence_percent: score.percent(),
                    record: record.clone(),
                },
                score,
            });
        }

        // sort_by is stable: equal percentages stay in catalog order.
        ranked.sort_by(|a, b| {
            b.result
                .confidence_percent
                .total_cmp(&a.result.confidence_percent)
        });
        ranked.truncate(self.options.top_n);

        debug!(
            query_tokens = query.len(),
            records = catalog.len(),
            results = ranked.len(),
            "identify complete"
        );
        ranked
    }
}

/// Identify with the default similarity measure.
pub fn identify(
    catalog: &DiseaseCatalog,
    query_text: &str,
    options: IdentifyOptions,
) -> Vec<MatchResult> {
    Identifier::new(options).identify(catalog, query_text)
}
