#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod sync;
pub mod ui;
pub mod utils;
pub mod view;

// Re-export commonly used types outside of crate
pub use domain::{CollectorStatus, DayKey, Percent, Sample};
pub use ui::App;

use crate::config::COLLECTOR;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the collector's samples endpoint
    #[arg(long, default_value = COLLECTOR.samples_url)]
    pub samples_url: String,

    /// Override the collector's status endpoint
    #[arg(long, default_value = COLLECTOR.status_url)]
    pub status_url: String,

    /// Seconds between automatic refresh passes
    #[arg(long, default_value_t = COLLECTOR.refresh_interval_secs)]
    pub refresh_secs: u64,

    /// Days of samples kept in memory
    #[arg(long, default_value_t = COLLECTOR.retention_days)]
    pub retention_days: i64,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
