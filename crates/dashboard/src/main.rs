//! Treadmill Sales Report - Main Entry Point

use anyhow::Context;
use dashboard::{init_logging, run, Settings};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Optional settings file as the first argument
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref()).context("Failed to load settings")?;

    init_logging(&settings.log)?;
    info!("=== Aerofit Report v{} ===", env!("CARGO_PKG_VERSION"));

    let report = run(&settings)
        .with_context(|| format!("Failed to build report from {}", settings.data_path.display()))?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
