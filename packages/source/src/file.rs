//! Dataset TOML files read from disk at request time.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use food_safety_incident_models::IncidentDataset;

use crate::dataset::parse_dataset_toml;
use crate::{IncidentProvider, SourceError};

/// Reads and parses a dataset TOML file on every request, so edits to the
/// file show up without restarting.
#[derive(Debug, Clone)]
pub struct TomlFileProvider {
    path: PathBuf,
    id: String,
}

impl TomlFileProvider {
    /// Creates a provider for the given file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let id = path.display().to_string();
        Self { path, id }
    }

    /// The file this provider reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IncidentProvider for TomlFileProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn current(&self) -> Result<IncidentDataset, SourceError> {
        log::debug!("Reading dataset from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path).await?;
        parse_dataset_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_dataset_from_disk() {
        let tmp = std::env::temp_dir().join("food_safety_source_file_test.toml");
        std::fs::write(
            &tmp,
            r#"
period = "Q2 2025"

[previous]
total = 20

[[records]]
category = "Campylobacter"
incidents = 22
severity = "low"
trend = "increasing"
"#,
        )
        .unwrap();

        let provider = TomlFileProvider::new(tmp.clone());
        let dataset = provider.current().await.unwrap();
        assert_eq!(dataset.period, "Q2 2025");
        assert_eq!(dataset.records[0].incidents, 22);

        let _ = std::fs::remove_file(&tmp);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let provider = TomlFileProvider::new(
            std::env::temp_dir().join("food_safety_source_missing_dataset.toml"),
        );
        assert!(matches!(provider.current().await, Err(SourceError::Io(_))));
    }
}
