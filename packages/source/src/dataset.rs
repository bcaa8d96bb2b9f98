//! Dataset TOML parsing and validation.

use std::collections::BTreeSet;

use food_safety_incident_models::IncidentDataset;

use crate::SourceError;

/// Parses an [`IncidentDataset`] from a TOML string.
///
/// # Errors
///
/// Returns [`SourceError::Toml`] if the TOML is malformed or missing
/// required fields, and [`SourceError::DuplicateCategory`] if a category
/// is listed twice.
pub fn parse_dataset_toml(toml_str: &str) -> Result<IncidentDataset, SourceError> {
    let dataset: IncidentDataset = toml::de::from_str(toml_str)?;
    validate(&dataset)?;
    Ok(dataset)
}

/// Checks that every category appears at most once in the period.
///
/// An empty record list is accepted here; the analytics engine rejects it
/// when it tries to compute extremes.
///
/// # Errors
///
/// Returns [`SourceError::DuplicateCategory`] for the first repeated name.
pub fn validate(dataset: &IncidentDataset) -> Result<(), SourceError> {
    let mut seen = BTreeSet::new();
    for record in &dataset.records {
        if !seen.insert(record.category.as_str()) {
            return Err(SourceError::DuplicateCategory {
                category: record.category.clone(),
            });
        }
    }
    Ok(())
}
