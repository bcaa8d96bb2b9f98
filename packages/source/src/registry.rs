//! Dataset registry — loads incident datasets from embedded TOML files.
//!
//! Each `.toml` file in `packages/source/datasets/` is baked into the
//! binary at compile time via [`include_str!`]. Adding a new reporting
//! period is as simple as creating a new TOML file and adding it to the
//! list below.

use async_trait::async_trait;
use food_safety_incident_models::IncidentDataset;

use crate::dataset::parse_dataset_toml;
use crate::{IncidentProvider, SourceError};

/// Dataset served when no id is given.
pub const DEFAULT_DATASET_ID: &str = "q4_2024";

/// TOML datasets embedded at compile time.
const DATASET_TOMLS: &[(&str, &str)] = &[("q4_2024", include_str!("../datasets/q4_2024.toml"))];

/// Total number of embedded datasets (used in tests).
#[cfg(test)]
const EXPECTED_DATASET_COUNT: usize = 1;

/// Returns the ids of all embedded datasets.
#[must_use]
pub fn dataset_ids() -> Vec<&'static str> {
    DATASET_TOMLS.iter().map(|(id, _)| *id).collect()
}

/// Parses the embedded dataset with the given id.
///
/// # Errors
///
/// Returns [`SourceError::UnknownDataset`] if no dataset has that id, or
/// the parse error if the embedded TOML is invalid.
pub fn load_dataset(id: &str) -> Result<IncidentDataset, SourceError> {
    let (_, toml_str) = DATASET_TOMLS
        .iter()
        .find(|(name, _)| *name == id)
        .ok_or_else(|| SourceError::UnknownDataset { id: id.to_string() })?;
    parse_dataset_toml(toml_str)
}

/// Serves one of the embedded datasets.
#[derive(Debug, Clone)]
pub struct EmbeddedProvider {
    id: String,
}

impl EmbeddedProvider {
    /// Creates a provider for the embedded dataset with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnknownDataset`] if no dataset has that id.
    pub fn new(id: &str) -> Result<Self, SourceError> {
        if DATASET_TOMLS.iter().any(|(name, _)| *name == id) {
            Ok(Self { id: id.to_string() })
        } else {
            Err(SourceError::UnknownDataset { id: id.to_string() })
        }
    }
}

impl Default for EmbeddedProvider {
    fn default() -> Self {
        Self {
            id: DEFAULT_DATASET_ID.to_string(),
        }
    }
}

#[async_trait]
impl IncidentProvider for EmbeddedProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn current(&self) -> Result<IncidentDataset, SourceError> {
        load_dataset(&self.id)
    }
}
