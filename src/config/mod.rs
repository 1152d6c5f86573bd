pub mod authority;

pub use authority::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RegionScopeError, Result};
use crate::region::RegionSource;

/// Console configuration from `.region-scope/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// External region dataset (JSON). The bundled dataset is used when unset.
    #[serde(default)]
    pub region_data: Option<PathBuf>,

    /// How identity fields translate into a scope.
    #[serde(default)]
    pub authority: AuthorityPolicy,
}

impl ConsoleConfig {
    /// Load config from a YAML file. Returns default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self =
            serde_yaml::from_str(&contents).map_err(|e| RegionScopeError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        // Relative dataset paths are taken from the config file's directory.
        if let (Some(data), Some(dir)) = (config.region_data.as_mut(), path.parent()) {
            if data.is_relative() {
                *data = dir.join(&*data);
            }
        }
        Ok(config)
    }

    /// Load config from the project root. Checks `.region-scope/config.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        Self::load_from(&project_root.join(".region-scope").join("config.yml"))
    }

    /// The region dataset this config points at.
    pub fn load_source(&self) -> Result<RegionSource> {
        match &self.region_data {
            Some(path) => RegionSource::load_from(path),
            None => RegionSource::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = ConsoleConfig::load_project(tmp.path()).unwrap();
        assert!(config.region_data.is_none());
        assert!(config.authority.honor_super_admin);
    }

    #[test]
    fn test_relative_data_path() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".region-scope");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yml"), "region_data: regions.json\n").unwrap();

        let config = ConsoleConfig::load_project(tmp.path()).unwrap();
        assert_eq!(config.region_data, Some(dir.join("regions.json")));
    }

    #[test]
    fn test_bad_yaml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yml");
        std::fs::write(&path, "region_data: [unterminated\n").unwrap();
        let err = ConsoleConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, RegionScopeError::ConfigParse { .. }));
    }
}
