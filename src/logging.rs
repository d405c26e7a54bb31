//! stderr logging. stdout is reserved for command output.

use std::str::FromStr;

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub fn init(level: &str) -> Result<()> {
    let level = LevelFilter::from_str(level).map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level '{}'. Expected one of: off, error, warn, info, debug, trace",
            level
        )
    })?;

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logging")
}
