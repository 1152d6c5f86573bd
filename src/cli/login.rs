use std::path::Path;

use super::{print_nodes, CliContext};
use crate::error::{RegionScopeError, Result};
use crate::session::{AdminIdentity, ScopeCache};

/// Read an admin profile (JSON or YAML by extension).
pub fn load_profile(path: &Path) -> Result<AdminIdentity> {
    let contents = std::fs::read_to_string(path)?;
    let parse_err = |reason: String| RegionScopeError::ConfigParse {
        path: path.to_path_buf(),
        reason,
    };
    if path.extension().is_some_and(|e| e == "json") {
        return serde_json::from_str(&contents).map_err(|e| parse_err(e.to_string()));
    }
    serde_yaml::from_str(&contents).map_err(|e| parse_err(e.to_string()))
}

/// Simulate a login: derive the session scope for a profile and print it.
pub fn run_login(ctx: &CliContext, profile: &Path, json: bool) -> Result<()> {
    let identity = load_profile(profile)?;
    let summary = identity.summary();

    let mut cache = ScopeCache::new(ctx.tree.clone(), ctx.config.authority.clone());
    cache.on_login(identity);

    let scope = cache
        .descriptor()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "none".into());
    eprintln!(
        "region-scope: user '{}' scope={} address='{}' department='{}'",
        cache.identity().map(|i| i.user_name.as_str()).unwrap_or(""),
        scope,
        summary.address,
        summary.department
    );

    if cache.scoped_tree().is_empty() {
        eprintln!("region-scope: no accessible regions");
        std::process::exit(1);
    }

    print_nodes(cache.scoped_tree().nodes(), json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_profile_aliases() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("admin.json");
        std::fs::write(&path, r#"{"userName": "li", "adminLevel": 2}"#).unwrap();
        let identity = load_profile(&path).unwrap();
        assert_eq!(identity.user_name, "li");
    }

    #[test]
    fn test_bad_json_profile_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("admin.json");
        std::fs::write(&path, r#"{"userName": "li","#).unwrap();
        match load_profile(&path).unwrap_err() {
            RegionScopeError::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_yaml_profile_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("admin.yml");
        std::fs::write(&path, "user_name: [unterminated\n").unwrap();
        assert!(matches!(
            load_profile(&path),
            Err(RegionScopeError::ConfigParse { .. })
        ));
    }
}
