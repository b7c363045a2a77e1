//! Densha - Speed-tracker track viewer
//!
//! Command line front end: loads the bundled track, trims idle samples and
//! prints the summary, the visible chart window or a selection annotation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use densha::charts::{annotation, ChartSelection, ChartViewport, DistanceSeries, HoverPhase};
use densha::config::Settings;
use densha::data::{trim_idle, ContentLoader, ResourceBundle};
use densha::stats::TrackSummary;
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Speed-tracker distance chart", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Directory containing track resources
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    resource_dir: Option<PathBuf>,

    /// Track resource name, without the .csv extension
    #[arg(long, global = true)]
    name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print statistics of the trimmed track
    Summary,
    /// Print the visible window of the distance series
    Series {
        /// Scroll the window this many seconds past the track start
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Print the annotation for a selected elapsed time
    Select {
        /// Pointer position in elapsed seconds
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path).context("Failed to load settings")?,
        None => Settings::default(),
    };
    if let Some(dir) = cli.resource_dir {
        settings.resource_dir = dir;
    }
    if let Some(name) = cli.name {
        settings.resource_name = name;
    }

    let bundle = ResourceBundle::new(&settings.resource_dir);
    let rows = ContentLoader::load_or_empty(&bundle, &settings.resource_name);
    let trimmed = trim_idle(&rows);
    info!(
        resource = %settings.resource_name,
        loaded = rows.len(),
        kept = trimmed.len(),
        "track ready"
    );

    let output = match cli.command {
        Command::Summary => match TrackSummary::from_rows(&trimmed) {
            Some(summary) => serde_json::to_value(&summary)?,
            None => {
                warn!("no moving samples in track");
                serde_json::Value::Null
            }
        },
        Command::Series { offset } => {
            let series = DistanceSeries::from_rows(&trimmed);
            match ChartViewport::for_series(&series, settings.visible_secs) {
                Some(mut viewport) => {
                    viewport.scroll_by(offset);
                    let range = viewport.visible_range();
                    json!({
                        "range": [range.start(), range.end()],
                        "points": viewport.visible_points(&series),
                    })
                }
                None => json!({ "range": null, "points": [] }),
            }
        }
        Command::Select { at } => {
            let series = DistanceSeries::from_rows(&trimmed);
            let mut selection = ChartSelection::new();
            selection.hover(HoverPhase::Active(at));
            serde_json::to_value(annotation(&series, &selection))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
