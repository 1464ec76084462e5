use std::fs;
use std::path::{Path, PathBuf};

use pantry_core::{BundledCatalog, CatalogLoader, JsonCatalog, DEFAULT_TOP_K};
use pantry_lint::LintConfig;
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pantry.config.yaml";

/// Project configuration from pantry.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct PantryConfig {
    /// Catalog file or directory, relative to the config file.
    pub catalog: Option<PathBuf>,
    pub top_k: Option<usize>,
    #[serde(default)]
    pub lint: LintConfig,
}

/// A parsed config plus the directory its relative paths resolve against.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: PantryConfig,
    pub base_dir: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn top_k(&self, flag: Option<usize>) -> usize {
        flag.or(self.config.top_k).unwrap_or(DEFAULT_TOP_K)
    }

    /// Pick the catalog: `--catalog` flag, then config, then the bundled demo catalog.
    pub fn catalog(&self, flag: Option<&Path>) -> Box<dyn CatalogLoader> {
        if let Some(path) = flag {
            debug!(path = %path.display(), "catalog from command line");
            return Box::new(JsonCatalog::new(path));
        }

        if let Some(ref path) = self.config.catalog {
            let resolved = match self.base_dir {
                Some(ref base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            };
            debug!(path = %resolved.display(), "catalog from config");
            return Box::new(JsonCatalog::new(resolved));
        }

        debug!("using bundled catalog");
        Box::new(BundledCatalog)
    }
}

/// Read the config named by `--config`, or the default file if it exists.
///
/// An explicit path that cannot be read is an error; a missing default
/// file just means defaults.
pub fn read_config(explicit: Option<&Path>) -> Result<LoadedConfig, String> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(LoadedConfig::default());
            }
            default
        }
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: PantryConfig = serde_yaml::from_str(&content)
        .map_err(|e| format!("Invalid YAML config {}: {e}", path.display()))?;

    debug!(path = %path.display(), "loaded config");

    Ok(LoadedConfig {
        config,
        base_dir: path.parent().map(Path::to_path_buf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_lint::RuleLevel;

    fn samples_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../samples")
    }

    #[test]
    fn sample_config_parses() {
        let loaded = read_config(Some(&samples_dir().join("pantry.config.yaml"))).unwrap();
        assert_eq!(loaded.config.top_k, Some(2));
        assert_eq!(
            loaded.config.lint.rules.get("lossy-plural"),
            Some(&RuleLevel::Off)
        );
    }

    #[test]
    fn catalog_resolves_against_config_dir() {
        let loaded = read_config(Some(&samples_dir().join("pantry.config.yaml"))).unwrap();
        let recipes = loaded.catalog(None).load().unwrap();
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn flags_override_config() {
        let loaded = read_config(Some(&samples_dir().join("pantry.config.yaml"))).unwrap();
        assert_eq!(loaded.top_k(Some(7)), 7);
        assert_eq!(loaded.top_k(None), 2);

        let flagged = loaded.catalog(Some(&samples_dir().join("split/dinner.json")));
        assert_eq!(flagged.load().unwrap().len(), 1);
    }

    #[test]
    fn defaults_without_config() {
        let loaded = LoadedConfig::default();
        assert_eq!(loaded.top_k(None), DEFAULT_TOP_K);
        assert_eq!(loaded.catalog(None).load().unwrap().len(), 12);
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let err = read_config(Some(Path::new("/no/such/pantry.config.yaml"))).unwrap_err();
        assert!(err.starts_with("Failed to read config"));
    }
}
