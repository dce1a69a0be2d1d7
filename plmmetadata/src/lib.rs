//! # plmmetadata - Extraction des métadonnées audio
//!
//! Lit titre, artiste et durée dans les tags d'un fichier audio (via
//! `lofty`) et enregistre la pochette embarquée, réduite et convertie en
//! JPEG, dans le [`plmstore::MediaStore`].
//!
//! L'extraction ne remonte jamais d'erreur : en cas d'échec les valeurs
//! sont déduites du nom de fichier (voir [`fallback_info`]).
//!
//! ```rust,no_run
//! use plmmetadata::{MetadataExtractor, TagExtractor};
//! use plmstore::MediaStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MediaStore::new("uploads", "uploads/covers").unwrap());
//! let extractor = TagExtractor::new(store);
//! let info = extractor.extract(Path::new("uploads/song.mp3"), "song.mp3");
//! println!("{} ({:?})", info.title, info.artist);
//! ```

mod config_ext;
pub mod cover;
mod error;
mod extractor;
mod info;

pub use config_ext::MetadataConfigExt;
pub use error::MetadataError;
pub use extractor::{DEFAULT_COVER_MAX_SIZE, MetadataExtractor, TagExtractor};
pub use info::{TrackInfo, base_name, fallback_info, format_duration};
