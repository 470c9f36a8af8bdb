//! Utility functions used throughout the application

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("dashtui-debug.log");
    path
}

/// Send tracing output to the debug log file (only with --debug)
///
/// Nothing is ever written to the terminal: the TUI owns it.
pub fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dashtui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
