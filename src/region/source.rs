use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RegionScopeError, Result};

/// City name -> ordered district names.
pub type CityMap = IndexMap<String, Vec<String>>;

const BUNDLED_REGIONS: &str = include_str!("../../data/regions.json");

/// Flat province -> city -> district dataset.
///
/// Iteration order at every level is the order of the underlying JSON
/// document; codes are assigned from it, so it must never be re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSource {
    provinces: IndexMap<String, CityMap>,
}

impl RegionSource {
    pub fn new(provinces: IndexMap<String, CityMap>) -> Self {
        Self { provinces }
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_REGIONS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RegionScopeError::MalformedSourceData {
            reason: e.to_string(),
        })
    }

    /// Load a dataset from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RegionScopeError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| RegionScopeError::MalformedSourceData {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    pub fn provinces(&self) -> impl Iterator<Item = (&String, &CityMap)> {
        self.provinces.iter()
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Hex SHA-256 of the dataset's canonical JSON form.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(&self.provinces)?;
        Ok(format!("{:x}", Sha256::digest(&canonical)))
    }
}
