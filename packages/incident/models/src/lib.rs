#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Food safety incident record types.
//!
//! This crate defines the per-category incident record shared by the data
//! sources and the analytics engine, together with the severity and trend
//! classifications attached to each record and the prior-period baseline
//! used for period-over-period comparisons.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity classification for a pathogen or contaminant category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Mild illness, rarely requires treatment
    Low,
    /// Illness that may require medical attention
    Medium,
    /// Serious illness, hospitalization or outbreak risk
    High,
}

impl Severity {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Direction a category's incident count is moving in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    /// More incidents than in recent periods
    Increasing,
    /// Roughly flat
    Stable,
    /// Fewer incidents than in recent periods
    Decreasing,
}

impl Trend {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Increasing, Self::Stable, Self::Decreasing]
    }
}

/// One category's incident count for the current reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Pathogen or contaminant name (e.g. "Salmonella").
    pub category: String,
    /// Number of incidents in the period.
    pub incidents: u32,
    /// Severity classification.
    pub severity: Severity,
    /// Trend classification.
    pub trend: Trend,
}

impl IncidentRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(category: impl Into<String>, incidents: u32, severity: Severity, trend: Trend) -> Self {
        Self {
            category: category.into(),
            incidents,
            severity,
            trend,
        }
    }

    /// Whether this category is trending upward.
    #[must_use]
    pub fn is_increasing(&self) -> bool {
        self.trend == Trend::Increasing
    }

    /// Whether this category is classified as high severity.
    #[must_use]
    pub fn is_high_severity(&self) -> bool {
        self.severity == Severity::High
    }
}

/// Aggregate figures for the previous reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBaseline {
    /// Total incidents across all categories in the previous period.
    pub total: u64,
    /// Leading category in the previous period. Informational only.
    #[serde(default)]
    pub highest_category: String,
    /// Incident count of the leading category in the previous period.
    #[serde(default)]
    pub highest_count: u64,
}

/// A complete reporting-period snapshot as handed out by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDataset {
    /// Human-readable label of the current period (e.g. "Q4 2024").
    pub period: String,
    /// Current-period records, in source order.
    pub records: Vec<IncidentRecord>,
    /// Previous-period baseline.
    pub previous: PeriodBaseline,
}
