//! Helpers for the bar chart view that consumes [`SeriesPoint`]s.
//!
//! The view draws bars sorted from most to fewest incidents, colors each
//! bar by category, and shows each bar's share of the total.

use food_safety_analytics_models::{SeriesPoint, format_one_decimal};
use serde::Serialize;

use crate::metrics::share_of_total;

/// Color used for categories without a dedicated entry.
pub const DEFAULT_COLOR: &str = "#6b7280";

/// Category colors (Tailwind 500 shades).
const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Salmonella", "#ef4444"),
    ("E. coli", "#f97316"),
    ("Listeria", "#eab308"),
    ("Norovirus", "#3b82f6"),
    ("Campylobacter", "#8b5cf6"),
];

/// Returns the bar color for a category, falling back to [`DEFAULT_COLOR`].
#[must_use]
pub fn bar_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_COLOR, |(_, color)| *color)
}

/// Sorts the series from most to fewest incidents. Equal counts keep their
/// input order.
#[must_use]
pub fn sorted_desc(series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| b.incidents.cmp(&a.incidents));
    sorted
}

/// The category with the most incidents, or `None` for an empty series.
#[must_use]
pub fn most_common(series: &[SeriesPoint]) -> Option<&SeriesPoint> {
    series
        .iter()
        .reduce(|max, point| if point.incidents > max.incidents { point } else { max })
}

/// One drawn bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    /// Category name.
    pub category: String,
    /// Incident count.
    pub incidents: u32,
    /// Fill color.
    pub color: &'static str,
    /// Share of the chart total, one-decimal string.
    pub share: String,
}

/// Everything the view needs to draw the chart and its footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    /// Bars, most incidents first.
    pub bars: Vec<ChartBar>,
    /// Total incidents across the series.
    pub total: u64,
    /// Most common category, `"N/A"` for an empty series.
    pub most_common: String,
}

impl ChartView {
    /// Builds the view model for a series.
    #[must_use]
    pub fn from_series(series: &[SeriesPoint]) -> Self {
        let total: u64 = series.iter().map(|p| u64::from(p.incidents)).sum();
        let bars = sorted_desc(series)
            .into_iter()
            .map(|point| ChartBar {
                color: bar_color(&point.category),
                share: format_one_decimal(share_of_total(u64::from(point.incidents), total)),
                category: point.category,
                incidents: point.incidents,
            })
            .collect();

        Self {
            bars,
            total,
            most_common: most_common(series)
                .map_or_else(|| "N/A".to_string(), |p| p.category.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(category: &str, incidents: u32) -> SeriesPoint {
        SeriesPoint {
            category: category.to_string(),
            incidents,
        }
    }

    fn q4_series() -> Vec<SeriesPoint> {
        vec![
            point("Salmonella", 45),
            point("E. coli", 30),
            point("Listeria", 15),
            point("Norovirus", 25),
            point("Campylobacter", 20),
        ]
    }

    #[test]
    fn known_and_unknown_colors() {
        assert_eq!(bar_color("Salmonella"), "#ef4444");
        assert_eq!(bar_color("Campylobacter"), "#8b5cf6");
        assert_eq!(bar_color("Hepatitis A"), DEFAULT_COLOR);
        assert_eq!(bar_color("salmonella"), DEFAULT_COLOR);
    }

    #[test]
    fn sorts_descending_and_stable() {
        let series = vec![point("A", 5), point("B", 9), point("C", 5)];
        let sorted: Vec<String> = sorted_desc(&series).into_iter().map(|p| p.category).collect();
        assert_eq!(sorted, ["B", "A", "C"]);
    }

    #[test]
    fn view_for_q4_series() {
        let view = ChartView::from_series(&q4_series());
        assert_eq!(view.total, 135);
        assert_eq!(view.most_common, "Salmonella");

        let order: Vec<&str> = view.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(
            order,
            ["Salmonella", "E. coli", "Norovirus", "Campylobacter", "Listeria"]
        );
        assert_eq!(view.bars[0].share, "33.3");
        assert_eq!(view.bars[0].color, "#ef4444");
        assert_eq!(view.bars[4].share, "11.1");
    }

    #[test]
    fn halfway_share_rounds_up() {
        let view = ChartView::from_series(&[point("Salmonella", 399), point("Listeria", 1)]);
        assert_eq!(view.bars[0].share, "99.8");
        assert_eq!(view.bars[1].share, "0.3");
    }

    #[test]
    fn empty_series_view() {
        let view = ChartView::from_series(&[]);
        assert!(view.bars.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.most_common, "N/A");
    }
}
