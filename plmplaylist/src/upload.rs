//! Réception d'un fichier audio et ajout à la playlist
//!
//! Ordre des vérifications : nom de fichier, extension, position. Rien
//! n'est écrit ni extrait tant qu'elles ne sont pas toutes passées.

use crate::playlist::SharedPlaylist;
use crate::track::Track;
use crate::{Error, Result};
use plmmetadata::{MetadataExtractor, fallback_info};
use plmstore::MediaStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Extensions acceptées par défaut
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a"];

/// Enregistre les fichiers reçus et crée les tracks correspondants
pub struct Uploader {
    store: Arc<MediaStore>,
    extractor: Arc<dyn MetadataExtractor>,
    allowed_extensions: Vec<String>,
}

impl Uploader {
    pub fn new(store: Arc<MediaStore>, extractor: Arc<dyn MetadataExtractor>) -> Self {
        Self {
            store,
            extractor,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    /// Remplace la liste des extensions acceptées (sans point, insensible à la casse)
    pub fn with_allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn store(&self) -> &Arc<MediaStore> {
        &self.store
    }

    /// Vérifie qu'un nom de fichier porte une extension acceptée
    pub fn check_filename(&self, filename: &str) -> Result<()> {
        if filename.is_empty() {
            return Err(Error::EmptyFilename);
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ext) if self.allowed_extensions.contains(&ext) => Ok(()),
            _ => Err(Error::UnsupportedExtension(filename.to_string())),
        }
    }

    /// Enregistre le fichier, extrait ses métadonnées et l'insère
    ///
    /// `position` est la valeur brute du formulaire : absente ou vide
    /// signifie « à la fin ». Retourne l'identifiant du nouveau track.
    pub async fn upload(
        &self,
        playlist: &SharedPlaylist,
        filename: &str,
        data: &[u8],
        position: Option<&str>,
    ) -> Result<String> {
        self.check_filename(filename)?;
        let position = parse_position(position)?;

        let stored = self.store.save_media(filename, data).await?;

        let extractor = self.extractor.clone();
        let path = stored.path.clone();
        let name = stored.filename.clone();
        let info = match tokio::task::spawn_blocking(move || extractor.extract(&path, &name)).await
        {
            Ok(info) => info,
            Err(e) => {
                warn!("Metadata extraction task failed: {}", e);
                fallback_info(&stored.filename)
            }
        };

        let track = Track::from_info(stored.filename.clone(), info);
        let id = playlist.insert(track, position).await;
        info!(track=%id, file=%stored.filename, "Song uploaded");
        Ok(id)
    }
}

/// Interprète la position envoyée avec un upload
///
/// Absente ou vide : `None`. Sinon un entier positif ou nul est attendu.
pub fn parse_position(raw: Option<&str>) -> Result<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| Error::InvalidPosition(value.to_string())),
    }
}
