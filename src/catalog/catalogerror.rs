use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read holiday catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("invalid holiday catalog: {0}")]
    Json(#[from] serde_json::Error)
}
