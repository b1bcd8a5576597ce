//! Properties command implementation.

use anyhow::{Context, Result};
use datapoint_lib::prelude::*;
use std::path::{Path, PathBuf};

use crate::display::{Format, write_properties};

/// Load `file`, optionally keep one location, and write the cleaned records.
pub(crate) fn properties(
    file: &Path,
    location: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
) -> Result<()> {
    let records = load_properties(file, location)
        .with_context(|| format!("Failed to load properties from {}", file.display()))?;
    tracing::info!(records = records.len(), "loaded properties");

    write_properties(&records, output.as_deref(), format)
}
