//! Types d'erreurs pour plmstore

/// Erreurs du stockage de fichiers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Type Result spécialisé pour plmstore
pub type Result<T> = std::result::Result<T, Error>;
