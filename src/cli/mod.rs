pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::logging::DEFAULT_LOG_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "hue-gateway",
    version,
    about = "Local HTTP gateway for a Philips Hue bridge"
)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// File that receives all log output
    #[arg(long, default_value = DEFAULT_LOG_FILE, env = "HUE_GATEWAY_LOG")]
    pub log_file: PathBuf,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
