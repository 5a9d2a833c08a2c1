//! Treadmill Sales Dashboard
//!
//! Data layer behind the sales dashboard: loads settings, prepares the
//! enriched dataset once and assembles the overview report.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod context;
pub mod error;
pub mod report;
pub mod settings;

pub use context::AnalyticsContext;
pub use error::PipelineError;
pub use report::{ConditionalProbabilities, ExplorerView, MeanStd, OverviewReport};
pub use settings::{ExplorerSettings, LogSettings, Settings};

use feature_engine::Enricher;

/// Install the global tracing subscriber
pub fn init_logging(settings: &LogSettings) -> Result<(), PipelineError> {
    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|e| PipelineError::Logging(format!("invalid level {:?}: {e}", settings.level)))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match &settings.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| PipelineError::Logging(format!("{}: {e}", path.display())))?;
            let writer = Mutex::new(file);
            if settings.json {
                builder.json().with_ansi(false).with_writer(writer).try_init()
            } else {
                builder.with_ansi(false).with_writer(writer).try_init()
            }
        }
        None if settings.json => builder.json().with_writer(io::stderr).try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };

    result.map_err(|e| PipelineError::Logging(e.to_string()))
}

/// Prepare the dataset described by `settings` and build the overview
pub fn run(settings: &Settings) -> Result<OverviewReport, PipelineError> {
    info!(path = %settings.data_path.display(), "Preparing dashboard data");

    let context = AnalyticsContext::open(&settings.data_path, &Enricher::default())?;
    let report = OverviewReport::build(&context.dataset(), &settings.explorer.predicates())?;

    info!(
        customers = report.total_customers,
        showing = report.explorer.showing,
        "Overview report built"
    );
    Ok(report)
}
