//! Symptom-to-record matching

use crate::record::{Dataset, DiseaseRecord};

/// Find the first record whose symptom set is a superset of `tokens`.
///
/// Records are scanned in original row order, so ties resolve to the
/// earliest row deterministically. Tokens must already be normalized
/// (trimmed, lowercase); comparison is exact equality, no fuzzy or
/// partial matching.
pub fn find_match<'a>(tokens: &[String], dataset: &'a Dataset) -> Option<&'a DiseaseRecord> {
    dataset
        .records()
        .iter()
        .find(|record| tokens.iter().all(|t| record.symptom_set.contains(t)))
}
