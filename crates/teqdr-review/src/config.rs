//! Command line arguments and the configuration derived from them.

use std::path::PathBuf;

use clap::Parser;
use teqdr_core::{CatalogProvider, JsonCatalogFile, SampleCatalog};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "teqdr-review")]
#[command(about = "ECG interpretation review screen for TEQDR")]
pub struct Args {
    /// JSON catalog of ECG records (uses the built-in sample records if not provided)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1400.0)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    pub height: f64,

    /// Start with the chat panel closed (default: open)
    #[arg(long)]
    pub chat_closed: bool,

    /// Tracing filter directives, e.g. "teqdr_core=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// Where the record catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Sample,
    File(PathBuf),
}

impl CatalogSource {
    pub fn provider(&self) -> Box<dyn CatalogProvider> {
        match self {
            CatalogSource::Sample => Box::new(SampleCatalog),
            CatalogSource::File(path) => Box::new(JsonCatalogFile::new(path.clone())),
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewConfig {
    pub catalog: CatalogSource,
    pub window: WindowConfig,
    /// Initial chat panel visibility.
    pub chat_open: bool,
    pub log_filter: Option<String>,
}

impl From<Args> for ReviewConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: args.catalog.map_or(CatalogSource::Sample, CatalogSource::File),
            window: WindowConfig {
                width: args.width,
                height: args.height,
            },
            chat_open: !args.chat_closed,
            log_filter: args.log_filter,
        }
    }
}
