//! Plain-text rendering of a [`ChartView`].

use std::fmt;

use food_safety_analytics::chart::ChartView;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 40;

/// A chart laid out as a title, one line per bar, and a totals footer.
pub struct TextChart<'a> {
    period: &'a str,
    view: &'a ChartView,
}

impl<'a> TextChart<'a> {
    #[must_use]
    pub const fn new(period: &'a str, view: &'a ChartView) -> Self {
        Self { period, view }
    }
}

impl fmt::Display for TextChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Food Safety Incidents by Pathogen Type")?;
        writeln!(f, "{} Contamination Report", self.period)?;
        writeln!(f)?;

        let label_width = self
            .view
            .bars
            .iter()
            .map(|b| b.category.chars().count())
            .max()
            .unwrap_or(0);
        let max = self.view.bars.first().map_or(0, |b| u64::from(b.incidents));

        for bar in &self.view.bars {
            let len = if max == 0 {
                0
            } else {
                u64::from(bar.incidents) * BAR_WIDTH as u64 / max
            };
            writeln!(
                f,
                "{category:<label_width$}  {bars:<width$}  {incidents:>4} ({share}%)",
                category = bar.category,
                bars = "#".repeat(usize::try_from(len).unwrap_or_default()),
                width = BAR_WIDTH,
                incidents = bar.incidents,
                share = bar.share,
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Total Incidents: {}  |  Most Common: {}",
            self.view.total, self.view.most_common
        )
    }
}
