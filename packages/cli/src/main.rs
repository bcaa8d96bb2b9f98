#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for the food safety insight tool.
//!
//! ```text
//! food_safety_cli insight "give me a trend analysis" [--pretty]
//! food_safety_cli chart
//! food_safety_cli tools
//! food_safety_cli datasets
//! ```
//!
//! Data comes from `--file <path>`, `--dataset <id>`, the
//! `FOOD_SAFETY_DATASET_FILE` environment variable, or the embedded
//! default dataset, in that order.

mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use food_safety_analytics::chart::ChartView;
use food_safety_analytics::tools::food_safety_insight;
use food_safety_analytics_models::{FoodSafetyInsightParams, SeriesPoint, tool_definitions};
use food_safety_source::registry::dataset_ids;
use food_safety_source::{
    EmbeddedProvider, IncidentProvider, SourceError, TomlFileProvider, provider_from_env,
};

#[derive(Parser)]
#[command(
    name = "food_safety_cli",
    about = "Food safety incident statistics and narrative summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the insight tool for a query and print the JSON result
    Insight {
        /// Free-text question about food safety
        #[arg(default_value = "")]
        query: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the current period as a text bar chart
    Chart {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the tool definitions sent to the LLM
    Tools,
    /// List embedded datasets
    Datasets,
}

#[derive(Args)]
struct SourceArgs {
    /// Embedded dataset id
    #[arg(long, conflicts_with = "file")]
    dataset: Option<String>,
    /// Dataset TOML file to read instead of an embedded dataset
    #[arg(long)]
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn provider(&self) -> Result<Box<dyn IncidentProvider>, SourceError> {
        if let Some(path) = &self.file {
            return Ok(Box::new(TomlFileProvider::new(path.clone())));
        }
        if let Some(id) = &self.dataset {
            return Ok(Box::new(EmbeddedProvider::new(id)?));
        }
        Ok(provider_from_env())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Insight {
            query,
            source,
            pretty,
        } => {
            let provider = source.provider()?;
            log::info!("Running insight for {query:?} against {}", provider.id());

            let result = food_safety_insight(provider.as_ref(), &FoodSafetyInsightParams { query })
                .await?;

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
        Commands::Chart { source } => {
            let provider = source.provider()?;
            let dataset = provider.current().await?;
            let series: Vec<SeriesPoint> = dataset.records.iter().map(SeriesPoint::from).collect();
            let view = ChartView::from_series(&series);
            print!("{}", render::TextChart::new(&dataset.period, &view));
        }
        Commands::Tools => {
            let json = serde_json::to_string_pretty(&tool_definitions())?;
            println!("{json}");
        }
        Commands::Datasets => {
            for id in dataset_ids() {
                println!("{id}");
            }
        }
    }

    Ok(())
}
