//! Extracteur basé sur lofty

use crate::cover::prepare_cover;
use crate::error::Result;
use crate::info::{TrackInfo, fallback_info};
use lofty::config::ParseOptions;
use lofty::picture::{Picture, PictureType};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;
use plmstore::MediaStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Taille maximale par défaut des pochettes (pixels)
pub const DEFAULT_COVER_MAX_SIZE: u32 = 500;

/// Transforme un fichier audio enregistré en informations descriptives
///
/// L'extraction n'échoue jamais : un fichier illisible ou d'un format
/// inconnu donne les valeurs déduites du nom de fichier.
pub trait MetadataExtractor: Send + Sync {
    /// * `path` - fichier sur disque
    /// * `filename` - nom d'origine, utilisé pour les valeurs par défaut
    fn extract(&self, path: &Path, filename: &str) -> TrackInfo;
}

/// Extracteur lisant les tags avec lofty et stockant les pochettes
pub struct TagExtractor {
    store: Arc<MediaStore>,
    cover_max_size: u32,
}

impl TagExtractor {
    pub fn new(store: Arc<MediaStore>) -> Self {
        Self {
            store,
            cover_max_size: DEFAULT_COVER_MAX_SIZE,
        }
    }

    pub fn with_cover_max_size(mut self, size: u32) -> Self {
        self.cover_max_size = size;
        self
    }

    fn read_tags(&self, path: &Path, filename: &str) -> Result<TrackInfo> {
        let tagged_file = Probe::open(path)?
            .options(ParseOptions::new())
            .read()?;

        let fallback = fallback_info(filename);
        let duration = tagged_file.properties().duration();
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        let title = tag
            .and_then(|t| t.title().map(|s| s.trim().to_string()))
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback.title);
        let artist = tag
            .and_then(|t| t.artist().map(|s| s.trim().to_string()))
            .filter(|s| !s.is_empty());

        let album_art = tagged_file
            .tags()
            .iter()
            .find_map(select_picture)
            .and_then(|picture| self.store_cover(picture.data()));

        Ok(TrackInfo {
            title,
            artist,
            duration: (!duration.is_zero()).then_some(duration),
            album_art,
        })
    }

    /// Prépare et enregistre une pochette, retourne sa référence
    ///
    /// Un échec n'affecte que la pochette : il est journalisé et donne `None`.
    pub fn store_cover(&self, data: &[u8]) -> Option<String> {
        let saved = prepare_cover(data, self.cover_max_size)
            .and_then(|jpeg| self.store.save_cover(&jpeg).map_err(Into::into));

        match saved {
            Ok(name) => {
                debug!(cover=%name, "Cover extracted");
                Some(name)
            }
            Err(e) => {
                warn!("Error extracting cover: {}", e);
                None
            }
        }
    }
}

impl MetadataExtractor for TagExtractor {
    fn extract(&self, path: &Path, filename: &str) -> TrackInfo {
        match self.read_tags(path, filename) {
            Ok(info) => info,
            Err(e) => {
                warn!(file=%path.display(), "Metadata extraction failed, using defaults: {}", e);
                fallback_info(filename)
            }
        }
    }
}

/// Pochette avant en priorité, sinon la première image du tag
fn select_picture(tag: &Tag) -> Option<&Picture> {
    tag.pictures()
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| tag.pictures().first())
}
