//! Pluggable string similarity used for approximate symptom matches.

use rapidfuzz::distance::jaro_winkler;
use rapidfuzz::fuzz;

/// A similarity measure between two normalized symptom strings.
///
/// Implementations return a ratio in `[0.0, 1.0]` where `1.0` means identical.
pub trait Similarity {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Normalized Indel similarity: `2 * M / T`, where `M` is the number of
/// characters in the longest common subsequence and `T` the combined length.
///
/// This is the default measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl Similarity for IndelRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        fuzz::ratio(a.chars(), b.chars())
    }
}

/// Jaro-Winkler similarity; favours strings sharing a common prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        jaro_winkler::similarity(a.chars(), b.chars())
    }
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn ratio(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}
