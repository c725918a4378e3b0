use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::catalogue::models::Assessment;

/// Shape of the catalogue file: `{"assessments": [...]}`.
#[derive(Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    assessments: Vec<Assessment>,
}

/// Reads the product catalogue from disk. Any failure here is fatal at
/// startup — the engine never serves with a partially loaded catalogue.
pub fn load_catalogue(path: &Path) -> Result<Vec<Assessment>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Catalogue file not found: {}", path.display()))?;
    let file: CatalogueFile = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in catalogue file: {}", path.display()))?;

    info!(
        "Loaded {} assessments from {}",
        file.assessments.len(),
        path.display()
    );
    Ok(file.assessments)
}
