use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::Level;

/// Install a stderr subscriber at `level` (error, warn, info, debug, trace).
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

pub fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim()).with_context(|| format!("Unknown log level: {}", level))
}
