//! Command handlers.
//!
//! Handlers take their parsed arguments plus a writer for the success
//! report, and return `anyhow::Result` so `main` can print the chain.

pub mod generate;
pub mod init;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `path`, creating parent directories first.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
