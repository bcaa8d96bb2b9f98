#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Food safety incident data providers.
//!
//! The analytics engine never reads data directly. It asks an
//! [`IncidentProvider`] for the current reporting period, which keeps the
//! computation pure and lets a real incident store replace the embedded
//! datasets without touching the engine.

pub mod dataset;
pub mod file;
pub mod registry;

use std::path::PathBuf;

use async_trait::async_trait;
use food_safety_incident_models::IncidentDataset;

pub use file::TomlFileProvider;
pub use registry::EmbeddedProvider;

/// Environment variable naming a dataset TOML file to load instead of the
/// embedded default.
pub const DATASET_FILE_ENV: &str = "FOOD_SAFETY_DATASET_FILE";

/// Errors that can occur while loading incident data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset TOML could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A category appears more than once in the same period.
    #[error("Duplicate category '{category}' in dataset")]
    DuplicateCategory {
        /// The repeated category name.
        category: String,
    },

    /// No embedded dataset has the requested id.
    #[error("Unknown dataset '{id}'")]
    UnknownDataset {
        /// The requested id.
        id: String,
    },
}

/// Source of the current reporting period's incident data.
///
/// Each call returns an owned snapshot, so callers never share mutable
/// state with the provider.
#[async_trait]
pub trait IncidentProvider: Send + Sync {
    /// Returns a short identifier for this provider, used in logs.
    fn id(&self) -> &str;

    /// Loads the current period's records and the previous-period baseline.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the data cannot be loaded or is invalid.
    async fn current(&self) -> Result<IncidentDataset, SourceError>;
}

/// A provider that hands out copies of a dataset it already holds.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    dataset: IncidentDataset,
}

impl StaticProvider {
    /// Wraps an in-memory dataset after checking it the same way a parsed
    /// dataset file is checked.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::DuplicateCategory`] if a category appears
    /// more than once.
    pub fn new(dataset: IncidentDataset) -> Result<Self, SourceError> {
        crate::dataset::validate(&dataset)?;
        Ok(Self { dataset })
    }
}

#[async_trait]
impl IncidentProvider for StaticProvider {
    fn id(&self) -> &str {
        "static"
    }

    async fn current(&self) -> Result<IncidentDataset, SourceError> {
        Ok(self.dataset.clone())
    }
}

/// Builds the default provider: the file named by
/// [`DATASET_FILE_ENV`] when set, otherwise the embedded default dataset.
#[must_use]
pub fn provider_from_env() -> Box<dyn IncidentProvider> {
    match std::env::var(DATASET_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            log::debug!("Using dataset file from {DATASET_FILE_ENV}: {path}");
            Box::new(TomlFileProvider::new(PathBuf::from(path)))
        }
        _ => Box::new(EmbeddedProvider::default()),
    }
}
