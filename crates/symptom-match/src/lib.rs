//! Rule-based symptom matching.
//!
//! Free-text symptom input is split into normalized tokens
//! ([`parse_symptoms`]), each stored disease is scored against those tokens
//! ([`Scorer`]), and the scores are filtered, ordered and truncated
//! ([`Identifier`]). Nothing here performs I/O or holds state between calls.

#![deny(unsafe_code)]

mod engine;
mod parse;
mod score;
mod similarity;
mod utils;

pub use engine::{IdentifyOptions, Identifier, ScoredMatch, identify};
pub use parse::parse_symptoms;
pub use score::{
    EXACT_MATCH_WEIGHT, FUZZY_MATCH_CUTOFF, FUZZY_MATCH_WEIGHT, Scorer, SymptomScore, TokenMatch,
    round_percent,
};
pub use similarity::{IndelRatio, JaroWinkler, Similarity};
pub use utils::normalize_text;
