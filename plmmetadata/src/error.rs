//! Erreurs internes de l'extraction
//!
//! Elles ne franchissent jamais [`MetadataExtractor::extract`](crate::MetadataExtractor) :
//! l'extracteur les journalise puis retombe sur les valeurs par défaut.

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Tag reading failed: {0}")]
    Tags(#[from] lofty::error::LoftyError),

    #[error("Cover processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Cover storage failed: {0}")]
    Store(#[from] plmstore::Error),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
