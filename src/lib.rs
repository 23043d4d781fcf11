#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// The pipeline facade
pub mod engine;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::{
    SeverityTier, SlopeTier, align, align_with, classify_slope, consolidate, describe_span,
    normalize,
};
pub use config::EngineConfig;
pub use domain::{Acceleration, CalendarMode, InstrumentSeries, RawPoint, TrendSpan};
pub use engine::{ChartPayload, ChartRequest, TieredSpan, TrendEngine};
pub use models::{AlignedSeries, AxisBounds, NormalizedSeries, SeriesRole};
pub use ui::{Point, Size, place_tooltip};

// CLI argument parsing
use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file overriding engine settings (trend, axis, tooltip, calendar, max_spans)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a chart request and print the payload as JSON
    Chart {
        /// Chart request JSON (primary series, optional comparison, candidate spans)
        request: PathBuf,
        /// Write the payload here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Compute a non-clipping tooltip position
    Tooltip {
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        viewport_width: f64,
        #[arg(long)]
        viewport_height: f64,
    },
}
