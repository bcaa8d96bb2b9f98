//! Tool execution functions for the AI agent.
//!
//! [`food_safety_insight`] is the tool itself. [`execute_tool`] is the
//! name-based entry point an agent loop calls with the raw JSON input the
//! LLM produced.

use food_safety_analytics_models::{FoodSafetyInsightParams, ToolName, ToolResult};
use food_safety_source::IncidentProvider;

use crate::InsightError;
use crate::metrics::compute;
use crate::narrative::narrate;
use crate::result::build_result;

/// Loads the current dataset, computes its metrics and renders the summary
/// the query asks for.
///
/// # Errors
///
/// Returns [`InsightError::Provider`] if the dataset cannot be loaded, and
/// [`InsightError::EmptyDataset`] or [`InsightError::ZeroBaseline`] if it
/// cannot be analyzed. No partial result is returned.
pub async fn food_safety_insight(
    provider: &dyn IncidentProvider,
    params: &FoodSafetyInsightParams,
) -> Result<ToolResult, InsightError> {
    let dataset = provider
        .current()
        .await
        .map_err(|source| InsightError::Provider {
            provider: provider.id().to_string(),
            source,
        })?;

    log::debug!(
        "Loaded {} records for {} from {}",
        dataset.records.len(),
        dataset.period,
        provider.id()
    );

    let metrics = compute(&dataset.records, &dataset.previous)?;
    let summary = narrate(&params.query, &dataset.period, &dataset.records, &metrics);

    Ok(build_result(&dataset.records, &metrics, summary))
}

/// Executes a single tool by name with the given parameters.
///
/// # Errors
///
/// Returns [`InsightError::UnknownTool`] for an unrecognized name,
/// [`InsightError::Json`] if `input` does not match the tool's parameters,
/// or whatever error the tool itself returns.
pub async fn execute_tool(
    provider: &dyn IncidentProvider,
    name: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value, InsightError> {
    let tool: ToolName = name.parse().map_err(|_| InsightError::UnknownTool {
        name: name.to_string(),
    })?;

    log::info!("Executing tool {tool}");

    let result = match tool {
        ToolName::FoodSafetyInsight => {
            let params: FoodSafetyInsightParams = serde_json::from_value(input.clone())?;
            food_safety_insight(provider, &params)
                .await
                .and_then(|r| serde_json::to_value(r).map_err(InsightError::from))
        }
    };

    if let Err(e) = &result {
        log::warn!("Tool {tool} failed: {e}");
    }

    result
}

/// Creates a brief human-readable summary of a tool result.
#[must_use]
pub fn summarize_tool_result(tool_name: &str, result: &serde_json::Value) -> String {
    match tool_name.parse::<ToolName>() {
        Ok(ToolName::FoodSafetyInsight) => {
            let total = result["insights"]["total"].as_u64().unwrap_or(0);
            let categories = result["series"].as_array().map_or(0, Vec::len);
            let change = result["insights"]["percentageChange"]
                .as_str()
                .unwrap_or("0.0");
            format!("{total} incidents across {categories} categories ({change}% vs previous period)")
        }
        Err(_) => "Result received".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use food_safety_incident_models::{
        IncidentDataset, IncidentRecord, PeriodBaseline, Severity, Trend,
    };
    use food_safety_source::{EmbeddedProvider, SourceError, StaticProvider};

    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl IncidentProvider for FailingProvider {
        fn id(&self) -> &str {
            "failing"
        }

        async fn current(&self) -> Result<IncidentDataset, SourceError> {
            Err(SourceError::UnknownDataset {
                id: "missing".to_string(),
            })
        }
    }

    fn params(query: &str) -> FoodSafetyInsightParams {
        FoodSafetyInsightParams {
            query: query.to_string(),
        }
    }

    fn dataset_with_baseline(total: u64) -> IncidentDataset {
        IncidentDataset {
            period: "Q4 2024".to_string(),
            records: vec![
                IncidentRecord::new("Salmonella", 45, Severity::High, Trend::Increasing),
                IncidentRecord::new("E. coli", 30, Severity::High, Trend::Stable),
            ],
            previous: PeriodBaseline {
                total,
                highest_category: "Salmonella".to_string(),
                highest_count: 38,
            },
        }
    }

    #[tokio::test]
    async fn trend_query_over_default_dataset() {
        let result = food_safety_insight(
            &EmbeddedProvider::default(),
            &params("give me a trend analysis"),
        )
        .await
        .unwrap();

        assert_eq!(result.kind, "food-safety-chart");
        assert_eq!(result.series.len(), 5);
        assert_eq!(result.insights.total, 135);
        assert_eq!(result.insights.percentage_change.to_string(), "17.4");
        assert_eq!(result.insights.trending, 2);
        assert_eq!(result.insights.high_severity, 2);

        assert!(result.summary.contains("135 total cases"));
        assert!(result.summary.contains("17.4% increase"));
        assert!(result.summary.contains("Salmonella"));
        assert!(result.summary.contains("2 out of 5 pathogen types are showing increasing trends"));
    }

    #[tokio::test]
    async fn overview_query_reports_leading_share() {
        let result = food_safety_insight(&EmbeddedProvider::default(), &params("overview please"))
            .await
            .unwrap();
        assert!(result.summary.contains("(33.3% of total)"), "{}", result.summary);
    }

    #[tokio::test]
    async fn zero_baseline_returns_no_result() {
        let provider = StaticProvider::new(dataset_with_baseline(0)).unwrap();
        let err = food_safety_insight(&provider, &params("trend")).await.unwrap_err();
        assert!(matches!(err, InsightError::ZeroBaseline));
    }

    #[tokio::test]
    async fn empty_dataset_returns_no_result() {
        let mut dataset = dataset_with_baseline(10);
        dataset.records.clear();
        let provider = StaticProvider::new(dataset).unwrap();
        let err = food_safety_insight(&provider, &params("")).await.unwrap_err();
        assert!(matches!(err, InsightError::EmptyDataset));
    }

    #[tokio::test]
    async fn provider_failure_names_provider() {
        let err = food_safety_insight(&FailingProvider, &params(""))
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Provider { ref provider, .. } if provider == "failing"));
    }

    #[tokio::test]
    async fn execute_tool_round_trips_json() {
        let provider = StaticProvider::new(dataset_with_baseline(70)).unwrap();
        let value = execute_tool(
            &provider,
            "food_safety_insight",
            &serde_json::json!({ "query": "summary" }),
        )
        .await
        .unwrap();

        assert_eq!(value["kind"], "food-safety-chart");
        assert_eq!(value["insights"]["total"], 75);
        assert_eq!(value["insights"]["percentageChange"], "7.1");
        assert_eq!(
            value["series"],
            serde_json::json!([
                { "category": "Salmonella", "incidents": 45 },
                { "category": "E. coli", "incidents": 30 }
            ])
        );
        assert!(value["series"][0].get("severity").is_none());

        assert_eq!(
            summarize_tool_result("food_safety_insight", &value),
            "75 incidents across 2 categories (7.1% vs previous period)"
        );
    }

    #[tokio::test]
    async fn execute_tool_rejects_unknown_name() {
        let provider = StaticProvider::new(dataset_with_baseline(70)).unwrap();
        let err = execute_tool(&provider, "rank_areas", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::UnknownTool { ref name } if name == "rank_areas"));
    }

    #[tokio::test]
    async fn execute_tool_rejects_missing_query() {
        let provider = StaticProvider::new(dataset_with_baseline(70)).unwrap();
        let err = execute_tool(&provider, "food_safety_insight", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Json(_)));
    }

    #[test]
    fn summarize_unknown_tool() {
        assert_eq!(
            summarize_tool_result("other", &serde_json::json!({})),
            "Result received"
        );
    }
}
