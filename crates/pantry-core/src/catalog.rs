//! Recipe catalog loaders.
//!
//! The matcher never reads storage itself; it is handed a catalog snapshot
//! produced by one of these loaders.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::CatalogError;
use crate::types::Recipe;

/// Demo catalog compiled into the binary.
const BUNDLED_JSON: &str = include_str!("../../../data/recipes.json");
const BUNDLED_NAME: &str = "data/recipes.json";

/// Anything that can produce the full recipe collection.
pub trait CatalogLoader: Send + Sync {
    fn load(&self) -> Result<Vec<Recipe>, CatalogError>;
}

// ---------------------------------------------------------------------------
// JSON file / directory
// ---------------------------------------------------------------------------

/// Reads recipes from a JSON file holding an array of records, or from every
/// `*.json` file below a directory (concatenated in path order).
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogLoader for JsonCatalog {
    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.path.clone()));
        }

        if self.path.is_dir() {
            let mut recipes = Vec::new();
            for file in scan_directory(&self.path)? {
                recipes.extend(read_file(&file)?);
            }
            debug!(path = %self.path.display(), count = recipes.len(), "loaded catalog directory");
            return Ok(recipes);
        }

        let recipes = read_file(&self.path)?;
        debug!(path = %self.path.display(), count = recipes.len(), "loaded catalog file");
        Ok(recipes)
    }
}

fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let pattern = dir.join("**/*.json");
    let pattern_str = pattern.to_string_lossy().replace('\\', "/");
    let entries =
        glob::glob(&pattern_str).map_err(|e| CatalogError::Pattern(e.to_string()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CatalogError::Io {
            path: e.path().to_path_buf(),
            source: e.into(),
        })?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

fn read_file(path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content, path)
}

fn parse_catalog(content: &str, path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// In-memory and bundled
// ---------------------------------------------------------------------------

/// A fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    recipes: Vec<Recipe>,
}

impl StaticCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl CatalogLoader for StaticCatalog {
    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        Ok(self.recipes.clone())
    }
}

/// The demo catalog shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogLoader for BundledCatalog {
    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        parse_catalog(BUNDLED_JSON, Path::new(BUNDLED_NAME))
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Loads once through the wrapped loader and serves that snapshot afterwards.
/// Failed loads are not cached.
pub struct CachedCatalog<L> {
    inner: L,
    snapshot: Mutex<Option<Vec<Recipe>>>,
}

impl<L: CatalogLoader> CachedCatalog<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            snapshot: Mutex::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}

impl<L: CatalogLoader> CatalogLoader for CachedCatalog<L> {
    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        // Poisoning leaves either nothing or a complete snapshot behind.
        let mut guard = self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(recipes) = guard.as_ref() {
            return Ok(recipes.clone());
        }

        let recipes = self.inner.load()?;
        debug!(count = recipes.len(), "cached catalog snapshot");
        *guard = Some(recipes.clone());
        Ok(recipes)
    }
}

/// First recipe whose name is exactly `name`.
pub fn find_recipe<'a>(catalog: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    catalog.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn samples_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../samples")
    }

    struct Counting {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl CatalogLoader for Counting {
        fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(CatalogError::NotFound(PathBuf::from("flaky.json")));
            }
            Ok(vec![Recipe::new("Toast", &["bread"])])
        }
    }

    #[test]
    fn bundled_catalog_parses() {
        let recipes = BundledCatalog.load().unwrap();
        assert_eq!(recipes.len(), 12);
        assert!(recipes.iter().all(|r| !r.ingredients.is_empty()));
        assert!(recipes[0].extra.contains_key("instructions"));
    }

    #[test]
    fn json_file_loads() {
        let loader = JsonCatalog::new(samples_dir().join("split/dinner.json"));
        let recipes = loader.load().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Plain Rice");
    }

    #[test]
    fn json_directory_concatenates_in_path_order() {
        let loader = JsonCatalog::new(samples_dir().join("split"));
        let names: Vec<String> = loader.load().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Boiled Eggs", "Buttered Toast", "Plain Rice"]);
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = JsonCatalog::new(samples_dir().join("nope.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = JsonCatalog::new(samples_dir().join("broken.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn cache_loads_once() {
        let cached = CachedCatalog::new(Counting {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        assert!(!cached.is_loaded());
        cached.load().unwrap();
        cached.load().unwrap();
        assert!(cached.is_loaded());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cache_does_not_keep_failures() {
        let cached = CachedCatalog::new(Counting {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        assert!(cached.load().is_err());
        assert_eq!(cached.load().unwrap().len(), 1);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn find_recipe_by_exact_name() {
        let catalog = vec![
            Recipe::new("Toast", &["bread"]),
            Recipe::new("Toast", &["bread", "butter"]),
        ];
        assert_eq!(find_recipe(&catalog, "Toast").unwrap().ingredients.len(), 1);
        assert!(find_recipe(&catalog, "toast").is_none());
    }
}
