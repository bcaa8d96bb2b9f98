#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident statistics and narrative engine for AI agent tool execution.
//!
//! The engine is two pure steps, [`metrics::compute`] and
//! [`narrative::narrate`], followed by [`result::build_result`]. The
//! [`tools`] module wires them to an
//! [`IncidentProvider`](food_safety_source::IncidentProvider) and exposes
//! the name-based dispatch the agent calls into.

pub mod chart;
pub mod metrics;
pub mod narrative;
pub mod result;
pub mod tools;

use thiserror::Error;

/// Errors that can occur while producing food safety insights.
#[derive(Debug, Error)]
pub enum InsightError {
    /// No incident records to analyze; highest/lowest are undefined.
    #[error("Cannot compute insights from an empty dataset")]
    EmptyDataset,

    /// The previous period's total is zero, so percentage change is
    /// undefined.
    #[error("Cannot compute percentage change against a previous-period total of 0")]
    ZeroBaseline,

    /// The data provider failed.
    #[error("Data provider '{provider}' failed: {source}")]
    Provider {
        /// Provider id.
        provider: String,
        /// Underlying error.
        source: food_safety_source::SourceError,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The agent asked for a tool that does not exist.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name.
        name: String,
    },
}
