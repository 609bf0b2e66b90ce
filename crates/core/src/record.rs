//! Disease records and the in-memory dataset store

use std::collections::HashSet;

use crate::input::parse_symptoms;

/// A single disease row: canonical symptom set plus treatment text.
///
/// Immutable after load. `symptoms` keeps the source's display string;
/// `symptom_set` holds the normalized lowercase tokens used for matching.
#[derive(Debug, Clone)]
pub struct DiseaseRecord {
    pub name: String,
    pub symptoms: String,
    pub symptom_set: HashSet<String>,
    pub medicine: String,
    pub precautions: String,
}

impl DiseaseRecord {
    /// Build a record, deriving the normalized symptom set from the
    /// comma-separated symptom list.
    pub fn new(name: String, symptoms: String, medicine: String, precautions: String) -> Self {
        let symptom_set = parse_symptoms(&symptoms).into_iter().collect();
        Self {
            name,
            symptoms,
            symptom_set,
            medicine,
            precautions,
        }
    }
}

/// Read-only table of disease records, preserving source row order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DiseaseRecord>,
}

impl Dataset {
    /// Build a dataset from rows in source order.
    ///
    /// One record per disease name (case-insensitive): the first
    /// occurrence wins, later duplicates are dropped.
    pub fn from_records(rows: impl IntoIterator<Item = DiseaseRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = rows
            .into_iter()
            .filter(|r| seen.insert(r.name.to_lowercase()))
            .collect();
        Self { records }
    }

    /// Records in original row order.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// Whether any record's symptom set contains the given token.
    pub fn symptom_known(&self, token: &str) -> bool {
        self.records.iter().any(|r| r.symptom_set.contains(token))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
