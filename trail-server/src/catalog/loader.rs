//! JSON catalog loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Catalog, CatalogBuilder, CatalogError};
use crate::domain::{Trail, Trailhead, TransitStop};

/// On-disk catalog document.
///
/// Identifiers and coordinates are validated during deserialization;
/// uniqueness and trail references are validated by `into_catalog`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub stops: Vec<TransitStop>,
    #[serde(default)]
    pub trailheads: Vec<Trailhead>,
    #[serde(default)]
    pub trails: Vec<Trail>,
}

impl CatalogFile {
    /// Validate and index the document.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let builder = self
            .stops
            .into_iter()
            .fold(CatalogBuilder::new(), CatalogBuilder::stop);
        let builder = self
            .trails
            .into_iter()
            .fold(builder, CatalogBuilder::trail);
        self.trailheads
            .into_iter()
            .fold(builder, CatalogBuilder::trailhead)
            .build()
    }
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.into_catalog()
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            stops = catalog.stop_count(),
            trailheads = catalog.trailhead_count(),
            trails = catalog.trail_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
