//! Assembly of the payload handed to the chart view.

use food_safety_analytics_models::{DerivedMetrics, Insights, RESULT_KIND, SeriesPoint, ToolResult};
use food_safety_incident_models::IncidentRecord;

/// Combines the records, metrics and summary into a [`ToolResult`].
///
/// The series keeps the input order and carries only category and count;
/// severity and trend stay out of the rendering payload.
#[must_use]
pub fn build_result(
    records: &[IncidentRecord],
    metrics: &DerivedMetrics,
    summary: String,
) -> ToolResult {
    ToolResult {
        kind: RESULT_KIND.to_string(),
        series: records.iter().map(SeriesPoint::from).collect(),
        summary,
        insights: Insights {
            total: metrics.total,
            percentage_change: metrics.percentage_change,
            trending: metrics.increasing_count,
            high_severity: metrics.high_severity_count,
        },
    }
}
