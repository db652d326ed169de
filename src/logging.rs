use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub(crate) const LOG_ENV: &str = "NUTRIPLAN_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Send log messages to the file at `path`, truncating it first.
///
/// The terminal is taken up by the UI, so nothing is logged unless this is
/// called.
pub(crate) fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install logger")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        "logging initialized"
    );
    Ok(())
}
