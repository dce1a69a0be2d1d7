//! Types d'erreurs pour plmplaylist

/// Erreurs de gestion de la playlist et des uploads
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No file selected")]
    MissingFile,

    #[error("Empty filename")]
    EmptyFilename,

    #[error("Unsupported file extension: {0:?}")]
    UnsupportedExtension(String),

    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),

    #[error("Malformed reorder request: {0}")]
    MalformedReorder(String),

    #[error("Track not found: {0}")]
    TrackNotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] plmstore::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type Result spécialisé pour plmplaylist
pub type Result<T> = std::result::Result<T, Error>;
