//! Derived statistics over one period's incident records.

use food_safety_analytics_models::{DerivedMetrics, PercentageChange};
use food_safety_incident_models::{IncidentRecord, PeriodBaseline};

use crate::InsightError;

/// Computes totals, extremes, period-over-period change and trend/severity
/// tallies.
///
/// Extremes are found with a left-to-right scan using strict comparison,
/// so the first record in input order wins ties.
///
/// # Errors
///
/// * [`InsightError::EmptyDataset`] if `records` is empty
/// * [`InsightError::ZeroBaseline`] if `baseline.total` is 0
pub fn compute(
    records: &[IncidentRecord],
    baseline: &PeriodBaseline,
) -> Result<DerivedMetrics, InsightError> {
    let highest = records
        .iter()
        .reduce(|max, item| if item.incidents > max.incidents { item } else { max })
        .ok_or(InsightError::EmptyDataset)?;
    let lowest = records
        .iter()
        .reduce(|min, item| if item.incidents < min.incidents { item } else { min })
        .ok_or(InsightError::EmptyDataset)?;

    let total: u64 = records.iter().map(|r| u64::from(r.incidents)).sum();
    let percentage_change = percentage_change(total, baseline.total)?;

    let metrics = DerivedMetrics {
        total,
        highest: highest.clone(),
        lowest: lowest.clone(),
        percentage_change,
        increasing_count: records.iter().filter(|r| r.is_increasing()).count(),
        high_severity_count: records.iter().filter(|r| r.is_high_severity()).count(),
    };

    log::debug!(
        "Computed metrics: total={} change={}% highest={} lowest={} increasing={} high_severity={}",
        metrics.total,
        metrics.percentage_change,
        metrics.highest.category,
        metrics.lowest.category,
        metrics.increasing_count,
        metrics.high_severity_count,
    );

    Ok(metrics)
}

/// `(current - previous) / previous * 100`.
///
/// # Errors
///
/// Returns [`InsightError::ZeroBaseline`] if `previous` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn percentage_change(current: u64, previous: u64) -> Result<PercentageChange, InsightError> {
    if previous == 0 {
        return Err(InsightError::ZeroBaseline);
    }
    let pct = (current as f64 - previous as f64) / previous as f64 * 100.0;
    Ok(PercentageChange::new(pct))
}

/// Percentage of `total` that `count` represents. A zero total yields 0
/// rather than `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share_of_total(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
