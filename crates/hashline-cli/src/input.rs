use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read the whole file at `path` into memory.
pub fn read_message(path: &Path) -> Result<Vec<u8>> {
    info!(path = %path.display(), "reading input");
    let message = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    debug!(bytes = message.len(), "input loaded");
    Ok(message)
}
