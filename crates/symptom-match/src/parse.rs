use std::collections::BTreeSet;

use crate::utils::normalize_text;

const DELIMITERS: [char; 2] = [',', ';'];

/// Splits free-text symptom input into normalized, de-duplicated tokens.
///
/// Commas and semicolons delimit symptoms. Segments that normalize to an
/// empty string are dropped and the first occurrence of each token keeps its
/// position. An empty result means the input cannot be matched.
pub fn parse_symptoms(input: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    input
        .split(DELIMITERS)
        .map(normalize_text)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
