//! Scoring a query against one disease's symptom set.
//!
//! Each query token earns [`EXACT_MATCH_WEIGHT`] when it appears verbatim
//! among the normalized disease symptoms. Otherwise the single closest symptom
//! is looked up with the configured [`Similarity`]; when its ratio reaches
//! [`FUZZY_MATCH_CUTOFF`] the token earns [`FUZZY_MATCH_WEIGHT`]. The matched
//! weight is divided by the average of the two set sizes (never less than one)
//! so that neither long nor short symptom lists are favoured.

use crate::similarity::{IndelRatio, Similarity};
use crate::utils::normalize_text;

/// Weight for a query token found verbatim among the disease symptoms.
pub const EXACT_MATCH_WEIGHT: f64 = 1.0;
/// Partial credit for a token accepted through approximate matching.
pub const FUZZY_MATCH_WEIGHT: f64 = 0.8;
/// Minimum similarity ratio for an approximate match to be accepted.
pub const FUZZY_MATCH_CUTOFF: f64 = 0.8;

/// How a single query token matched.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenMatch {
    Exact,
    Fuzzy { candidate: String, ratio: f64 },
    Unmatched,
}

impl TokenMatch {
    pub fn weight(&self) -> f64 {
        match self {
            Self::Exact => EXACT_MATCH_WEIGHT,
            Self::Fuzzy { .. } => FUZZY_MATCH_WEIGHT,
            Self::Unmatched => 0.0,
        }
    }
}

/// Score for one query/disease pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomScore {
    /// Sum of per-token weights.
    pub matched_weight: f64,
    /// `max(1, (|Q| + |D|) / 2)`.
    pub denominator: f64,
    /// Normalized confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Per-token breakdown in query order.
    pub tokens: Vec<(String, TokenMatch)>,
}

impl SymptomScore {
    /// Confidence as a percentage rounded to one decimal place.
    pub fn percent(&self) -> f64 {
        round_percent(self.confidence)
    }

    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.tokens
            .iter()
            .map(|(token, matched)| match matched {
                TokenMatch::Exact => format!("{token}: exact"),
                TokenMatch::Fuzzy { candidate, ratio } => {
                    format!("{token}: ~{candidate} ({:.0}%)", ratio * 100.0)
                }
                TokenMatch::Unmatched => format!("{token}: no match"),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Scales a raw confidence to a percentage with one decimal place.
pub fn round_percent(confidence: f64) -> f64 {
    (confidence * 1000.0).round() / 10.0
}

/// Scores query tokens against disease symptom sets.
#[derive(Debug, Clone, Default)]
pub struct Scorer<S = IndelRatio> {
    similarity: S,
}

impl Scorer<IndelRatio> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Similarity> Scorer<S> {
    /// Create a scorer using a custom similarity measure.
    pub fn with_similarity(similarity: S) -> Self {
        Self { similarity }
    }

    /// Score normalized query tokens against a disease's symptoms as stored.
    ///
    /// Disease symptoms are normalized here; `query` is expected to come from
    /// [`crate::parse_symptoms`].
    pub fn score<T: AsRef<str>>(&self, query: &[String], disease_symptoms: &[T]) -> SymptomScore {
        let normalized: Vec<String> = disease_symptoms
            .iter()
            .map(|s| normalize_text(s.as_ref()))
            .collect();

        let tokens: Vec<(String, TokenMatch)> = query
            .iter()
            .map(|token| (token.clone(), self.match_token(token, &normalized)))
            .collect();
        let matched_weight: f64 = tokens.iter().map(|(_, m)| m.weight()).sum();

        let denominator = ((query.len() + normalized.len()) as f64 / 2.0).max(1.0);
        // Several near-duplicate query tokens can hit the same symptom.
        let confidence = (matched_weight / denominator).clamp(0.0, 1.0);

        SymptomScore {
            matched_weight,
            denominator,
            confidence,
            tokens,
        }
    }

    fn match_token(&self, token: &str, symptoms: &[String]) -> TokenMatch {
        if symptoms.iter().any(|s| s == token) {
            return TokenMatch::Exact;
        }
        let mut best: Option<(&str, f64)> = None;
        for symptom in symptoms {
            let ratio = self.similarity.ratio(token, symptom);
            if best.is_none_or(|(_, top)| ratio > top) {
                best = Some((symptom, ratio));
            }
        }
        match best {
            Some((candidate, ratio)) if ratio >= FUZZY_MATCH_CUTOFF => TokenMatch::Fuzzy {
                candidate: candidate.to_string(),
                ratio,
            },
            _ => TokenMatch::Unmatched,
        }
    }
}
