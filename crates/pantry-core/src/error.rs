use std::path::PathBuf;

use thiserror::Error;

/// Reasons a catalog loader could not produce the recipe collection.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog source does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid recipe catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog pattern: {0}")]
    Pattern(String),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Recipe catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}
