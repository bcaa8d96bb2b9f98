#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived metrics and tool payload types for the food safety insight tool.
//!
//! Defines the input/output types of the tool the AI agent can invoke,
//! along with the JSON Schema description used in the LLM tool-use
//! protocol.

use food_safety_incident_models::IncidentRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value of [`ToolResult::kind`] understood by the chart view.
pub const RESULT_KIND: &str = "food-safety-chart";

/// Formats a value with exactly one fractional digit.
///
/// Values exactly halfway between two tenths (e.g. `0.25`) round away
/// from zero, so `0.25` reads `"0.3"` and `-0.25` reads `"-0.3"`. Every
/// other value rounds to the nearest tenth.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_one_decimal(value: f64) -> String {
    // A one-decimal tie is representable only as an odd multiple of 1/4.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0).round();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Period-over-period change in percent.
///
/// Always displayed with exactly one fractional digit and serialized as
/// that display string (e.g. `"17.4"`, `"-5.0"`), never as a number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PercentageChange(f64);

impl PercentageChange {
    /// Wraps a raw (unrounded) percentage.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw, unrounded value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The value rounded the same way it is displayed.
    #[must_use]
    pub fn rounded(self) -> f64 {
        self.to_string().parse().unwrap_or(self.0)
    }

    /// `true` only for a strictly positive displayed value. A displayed
    /// `0.0` counts as a decrease.
    #[must_use]
    pub fn is_increase(self) -> bool {
        self.rounded() > 0.0
    }

    /// `"increase"` or `"decrease"`.
    #[must_use]
    pub fn direction(self) -> &'static str {
        if self.is_increase() {
            "increase"
        } else {
            "decrease"
        }
    }

    /// Absolute value with one fractional digit, for phrasing such as
    /// "a 5.0% decrease".
    #[must_use]
    pub fn magnitude(self) -> String {
        format_one_decimal(self.rounded().abs())
    }
}

impl std::fmt::Display for PercentageChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_one_decimal(self.0))
    }
}

impl Serialize for PercentageChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PercentageChange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map(Self)
            .map_err(|e| serde::de::Error::custom(format!("Invalid percentage '{s}': {e}")))
    }
}

/// Statistics derived from one period's incident records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Sum of incidents across all records.
    pub total: u64,
    /// Record with the most incidents (first one on ties).
    pub highest: IncidentRecord,
    /// Record with the fewest incidents (first one on ties).
    pub lowest: IncidentRecord,
    /// Change of `total` against the previous period.
    pub percentage_change: PercentageChange,
    /// Number of records trending upward.
    pub increasing_count: usize,
    /// Number of high-severity records.
    pub high_severity_count: usize,
}

/// One bar of the chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Category name.
    pub category: String,
    /// Incident count.
    pub incidents: u32,
}

impl From<&IncidentRecord> for SeriesPoint {
    fn from(record: &IncidentRecord) -> Self {
        Self {
            category: record.category.clone(),
            incidents: record.incidents,
        }
    }
}

/// Headline figures attached to a [`ToolResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Total incidents this period.
    pub total: u64,
    /// Change against the previous period, one-decimal string.
    pub percentage_change: PercentageChange,
    /// Number of categories trending upward.
    pub trending: usize,
    /// Number of high-severity categories.
    pub high_severity: usize,
}

/// Parameters for the food safety insight tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSafetyInsightParams {
    /// The user's question about food safety.
    pub query: String,
}

/// Result of the food safety insight tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// Payload discriminator, always [`RESULT_KIND`].
    pub kind: String,
    /// Chart-ready series in source order.
    pub series: Vec<SeriesPoint>,
    /// Narrative summary chosen from the query.
    pub summary: String,
    /// Headline figures.
    pub insights: Insights,
}

/// Enumeration of all tool names the AI agent can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Show food safety incident data, trends and a narrative summary.
    FoodSafetyInsight,
}

impl ToolName {
    /// Wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodSafetyInsight => "food_safety_insight",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food_safety_insight" => Ok(Self::FoodSafetyInsight),
            other => Err(format!("Unknown tool: {other}")),
        }
    }
}

/// Returns the JSON Schema definitions for all available tools.
///
/// These are used in the LLM tool-use protocol to describe what
/// tools the agent can invoke.
#[must_use]
pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![serde_json::json!({
        "name": ToolName::FoodSafetyInsight.as_str(),
        "description": "Show food safety incident data and trends. Use this when users ask about food safety trends, contamination incidents, foodborne illness statistics, or food safety analysis.",
        "parameters": {
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "The user query about food safety" }
            },
            "required": ["query"]
        }
    })]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_change_displays_one_decimal() {
        assert_eq!(PercentageChange::new(17.391_304).to_string(), "17.4");
        assert_eq!(PercentageChange::new(-5.0).to_string(), "-5.0");
        assert_eq!(PercentageChange::new(0.0).to_string(), "0.0");
    }

    #[test]
    fn halfway_values_round_away_from_zero() {
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(-0.25), "-0.3");
        assert_eq!(format_one_decimal(1.75), "1.8");
        assert_eq!(format_one_decimal(0.15), "0.1");
        assert_eq!(format_one_decimal(33.333), "33.3");

        let up = PercentageChange::new((401.0 - 400.0) / 400.0 * 100.0);
        assert_eq!(up.to_string(), "0.3");
        assert_eq!(up.magnitude(), "0.3");
        assert_eq!(up.direction(), "increase");

        let down = PercentageChange::new((399.0 - 400.0) / 400.0 * 100.0);
        assert_eq!(down.to_string(), "-0.3");
        assert_eq!(down.magnitude(), "0.3");
        assert_eq!(down.direction(), "decrease");
    }

    #[test]
    fn zero_change_is_a_decrease() {
        assert_eq!(PercentageChange::new(0.0).direction(), "decrease");
        // Rounds to 0.0 on display, so it is labelled like zero.
        assert_eq!(PercentageChange::new(0.04).direction(), "decrease");
        assert_eq!(PercentageChange::new(0.06).direction(), "increase");
    }

    #[test]
    fn magnitude_drops_sign() {
        assert_eq!(PercentageChange::new(-12.345).magnitude(), "12.3");
        assert_eq!(PercentageChange::new(17.39).magnitude(), "17.4");
        assert_eq!(PercentageChange::new(-0.01).magnitude(), "0.0");
    }

    #[test]
    fn percentage_change_serializes_as_string() {
        let json = serde_json::to_value(PercentageChange::new(17.391)).unwrap();
        assert_eq!(json, serde_json::json!("17.4"));

        let back: PercentageChange = serde_json::from_value(json).unwrap();
        assert!((back.value() - 17.4).abs() < f64::EPSILON);
    }

    #[test]
    fn tool_name_parses_wire_name() {
        let name: ToolName = "food_safety_insight".parse().unwrap();
        assert_eq!(name, ToolName::FoodSafetyInsight);
        assert!("count_incidents".parse::<ToolName>().is_err());
    }

    #[test]
    fn tool_definitions_require_query() {
        let defs = tool_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0]["name"], "food_safety_insight");
        assert_eq!(defs[0]["parameters"]["required"], serde_json::json!(["query"]));
    }
}
