//! Dataset loading from the symptoms/disease CSV
//!
//! The dataset is read once at startup and is read-only afterwards.
//! Schema violations (missing columns) and an empty file are fatal:
//! the process must not serve traffic without a usable dataset.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use healthbot_core::{Dataset, DiseaseRecord};

/// Dataset loading errors (all startup-fatal)
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Read(#[from] csv::Error),

    #[error("dataset contains no records")]
    Empty,
}

/// One CSV row. Header names are part of the dataset contract; a missing
/// column fails deserialization.
#[derive(Debug, Deserialize)]
struct Row {
    disease: String,
    symptoms: String,
    medicine: String,
    precautions: String,
}

/// Load and validate the dataset from a CSV file.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: Row = row?;
        records.push(DiseaseRecord::new(
            row.disease,
            row.symptoms,
            row.medicine,
            row.precautions,
        ));
    }

    let dataset = Dataset::from_records(records);
    if dataset.is_empty() {
        return Err(DatasetError::Empty);
    }

    tracing::info!(diseases = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_records_in_row_order() {
        let file = write_csv(
            "disease,symptoms,medicine,precautions\n\
             Flu,\"fever, cough, headache\",oseltamivir,rest\n\
             Cold,\"sore throat, cough\",lozenges,fluids\n",
        );

        let dataset = load(file.path()).expect("load should succeed");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].name, "Flu");
        assert_eq!(dataset.records()[1].name, "Cold");
        assert!(dataset.symptom_known("sore throat"));
    }

    #[test]
    fn duplicate_disease_rows_keep_the_first() {
        let file = write_csv(
            "disease,symptoms,medicine,precautions\n\
             Flu,fever,oseltamivir,rest\n\
             Flu,sneezing,other,none\n",
        );

        let dataset = load(file.path()).expect("load should succeed");
        assert_eq!(dataset.len(), 1);
        assert!(dataset.symptom_known("fever"));
        assert!(!dataset.symptom_known("sneezing"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = write_csv(
            "disease,symptoms,medicine\n\
             Flu,fever,oseltamivir\n",
        );

        assert!(matches!(load(file.path()), Err(DatasetError::Read(_))));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let file = write_csv("disease,symptoms,medicine,precautions\n");
        assert!(matches!(load(file.path()), Err(DatasetError::Empty)));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            load("/nonexistent/dataset.csv"),
            Err(DatasetError::Read(_))
        ));
    }
}
