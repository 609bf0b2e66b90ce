//! Symptom input tokenization

/// Split comma-separated user text into normalized symptom tokens.
///
/// Each token is trimmed and lowercased. Tokens are kept in input order,
/// duplicates are preserved, and empty segments produce empty tokens
/// (the matcher simply fails to find a record for them).
pub fn parse_symptoms(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_lowercase()).collect()
}
