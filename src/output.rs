// src/output.rs
// Writes the classified URL list to disk as pretty JSON.

use crate::classify::ClassifiedUrl;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct OutputFile<'a> {
    domain: &'a str,
    urls: &'a [ClassifiedUrl],
}

pub fn save_output(path: &Path, domain: &str, urls: &[ClassifiedUrl]) -> Result<()> {
    let json = serde_json::to_string_pretty(&OutputFile { domain, urls })?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), count = urls.len(), "output saved");
    Ok(())
}
