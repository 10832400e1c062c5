//! Text normalization shared by query parsing and scoring.

/// Normalizes a symptom string for comparison.
///
/// Lowercases, strips ASCII punctuation without inserting whitespace, and
/// trims the result. Query tokens and stored symptoms must both pass through
/// this function before they are compared.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .trim()
        .to_string()
}
