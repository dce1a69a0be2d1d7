//! Informations descriptives extraites d'un fichier audio

use std::path::Path;
use std::time::Duration;

/// Résultat d'une extraction
///
/// Les champs absents sont laissés à `None` : c'est la couche playlist qui
/// décide de leur représentation (« Unknown artist », « 0:00 »...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    /// Référence de la pochette dans le store
    pub album_art: Option<String>,
}

/// Valeurs par défaut déduites du seul nom de fichier
pub fn fallback_info(filename: &str) -> TrackInfo {
    TrackInfo {
        title: base_name(filename),
        artist: None,
        duration: None,
        album_art: None,
    }
}

/// Nom de fichier sans son extension
pub fn base_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Formate une durée en `m:ss` (minutes non bornées, secondes sur deux chiffres)
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
