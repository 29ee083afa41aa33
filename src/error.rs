use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("video {id:?} has no title")]
    MissingTitle { id: String },

    #[error("duplicate video id {id:?}")]
    DuplicateId { id: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
