//! Query-driven summary text.
//!
//! The user's free-text query is classified into an [`Intent`] by ordered,
//! case-insensitive substring matching, and the matching template is
//! filled in with the derived metrics.

use food_safety_analytics_models::{DerivedMetrics, format_one_decimal};
use food_safety_incident_models::IncidentRecord;

use crate::metrics::share_of_total;

/// Which summary template a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Period-over-period change and upward trends.
    Trend,
    /// Totals, shares, extremes and severity.
    Overview,
    /// Everything else, including the empty query.
    Default,
}

impl Intent {
    /// Classifies a query. First match wins: a query mentioning "trend"
    /// is a [`Intent::Trend`] even if it also asks for a summary.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains("trend") {
            Self::Trend
        } else if query.contains("summary") || query.contains("overview") {
            Self::Overview
        } else {
            Self::Default
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trend => write!(f, "trend"),
            Self::Overview => write!(f, "overview"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Renders the summary the query asks for.
///
/// `period` is the human label of the current reporting period, used by
/// the trend template.
#[must_use]
pub fn narrate(
    query: &str,
    period: &str,
    records: &[IncidentRecord],
    metrics: &DerivedMetrics,
) -> String {
    let intent = Intent::classify(query);
    log::debug!("Query {query:?} classified as {intent}");

    match intent {
        Intent::Trend => trend(period, records, metrics),
        Intent::Overview => overview(records, metrics),
        Intent::Default => default(records, metrics),
    }
}

fn trend(period: &str, records: &[IncidentRecord], metrics: &DerivedMetrics) -> String {
    let highest = &metrics.highest;
    let upward = if highest.is_increasing() {
        " and is trending upward"
    } else {
        ""
    };

    format!(
        "Food safety incident trends for {period} show {total} total cases, a {change}% {direction} from last quarter. \
         {category} remains the leading concern with {count} cases{upward}. \
         {increasing} out of {tracked} pathogen types are showing increasing trends.",
        total = metrics.total,
        change = metrics.percentage_change,
        direction = metrics.percentage_change.direction(),
        category = highest.category,
        count = highest.incidents,
        increasing = metrics.increasing_count,
        tracked = records.len(),
    )
}

fn overview(records: &[IncidentRecord], metrics: &DerivedMetrics) -> String {
    let share = format_one_decimal(share_of_total(
        u64::from(metrics.highest.incidents),
        metrics.total,
    ));

    format!(
        "In the past quarter, we tracked {total} food safety incidents across {tracked} major pathogen categories. \
         {highest} led with {highest_count} cases ({share}% of total), while {lowest} had the fewest at {lowest_count} cases. \
         {high_severity} pathogens are classified as high severity.",
        total = metrics.total,
        tracked = records.len(),
        highest = metrics.highest.category,
        highest_count = metrics.highest.incidents,
        lowest = metrics.lowest.category,
        lowest_count = metrics.lowest.incidents,
        high_severity = metrics.high_severity_count,
    )
}

/// Mentions the records at positions 1 and 3 of the input order as the
/// runners-up. This is positional, not by rank: with a differently ordered
/// input the mentions may not be the second or fourth largest. Positions
/// past the end of the input are left out.
fn default(records: &[IncidentRecord], metrics: &DerivedMetrics) -> String {
    let mention = |r: &IncidentRecord| format!("{} ({} cases)", r.category, r.incidents);
    let followed_by = match (records.get(1), records.get(3)) {
        (Some(second), Some(fourth)) => {
            format!(", followed by {} and {}", mention(second), mention(fourth))
        }
        (Some(second), None) => format!(", followed by {}", mention(second)),
        (None, _) => String::new(),
    };

    format!(
        "Here's the latest food safety data: {total} total incidents this quarter. \
         {category} is the most common contaminant ({count} cases){followed_by}. \
         This represents a {change}% {direction} from the previous quarter.",
        total = metrics.total,
        category = metrics.highest.category,
        count = metrics.highest.incidents,
        change = metrics.percentage_change.magnitude(),
        direction = metrics.percentage_change.direction(),
    )
}
