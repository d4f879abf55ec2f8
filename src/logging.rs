use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const DEFAULT_LOG_FILE: &str = "hueApp.log";

fn default_filter(verbose: bool) -> EnvFilter {
    // `RUST_LOG` wins over the verbosity flag.
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Send all log output to a single file, truncated on startup.
pub fn init(path: &Path, verbose: bool) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::Logging(format!("cannot create log file {}: {}", path.display(), e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(default_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
