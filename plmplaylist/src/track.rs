//! Track : un morceau de la playlist et sa projection sérialisable

use plmmetadata::{TrackInfo, base_name, format_duration};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[cfg(feature = "plmserver")]
use utoipa::ToSchema;

/// Artiste affiché quand les tags n'en donnent pas
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Un morceau de la playlist
///
/// Une fois créé, un track n'est plus modifié : un déplacement retire
/// l'entrée puis en insère une copie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: String,
    title: String,
    artist: Option<String>,
    filename: String,
    duration: Option<Duration>,
    album_art: Option<String>,
}

impl Track {
    /// Crée un track avec un identifiant UUID v4 et le nom de fichier
    /// (sans extension) comme titre
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            id: Uuid::new_v4().to_string(),
            title: base_name(&filename),
            artist: None,
            filename,
            duration: None,
            album_art: None,
        }
    }

    /// Crée un track à partir du résultat de l'extraction
    pub fn from_info(filename: impl Into<String>, info: TrackInfo) -> Self {
        Self {
            title: info.title,
            artist: info.artist,
            duration: info.duration,
            album_art: info.album_art,
            ..Self::new(filename)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_album_art(mut self, album_art: impl Into<String>) -> Self {
        self.album_art = Some(album_art.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// Référence du fichier audio dans le store
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Référence de la pochette dans le store
    pub fn album_art(&self) -> Option<&str> {
        self.album_art.as_deref()
    }

    /// Projection en lecture seule, avec les valeurs par défaut appliquées
    pub fn view(&self) -> TrackView {
        TrackView::from(self)
    }
}

/// Vue sérialisable d'un [`Track`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "plmserver", derive(ToSchema))]
pub struct TrackView {
    #[cfg_attr(feature = "plmserver", schema(example = "0b7a4c1e-5f0e-4b8e-9d53-2f0c2b1f1a11"))]
    pub id: String,

    #[cfg_attr(feature = "plmserver", schema(example = "Wish You Were Here"))]
    pub title: String,

    #[cfg_attr(feature = "plmserver", schema(example = "Pink Floyd"))]
    pub artist: String,

    #[cfg_attr(feature = "plmserver", schema(example = "Wish_You_Were_Here.mp3"))]
    pub filename: String,

    /// Durée au format `m:ss`
    #[cfg_attr(feature = "plmserver", schema(example = "5:34"))]
    pub duration: String,

    pub album_art: Option<String>,
}

impl From<&Track> for TrackView {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track
                .artist
                .clone()
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            filename: track.filename.clone(),
            duration: format_duration(track.duration.unwrap_or_default()),
            album_art: track.album_art.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let track = Track::new("My_Song.mp3");

        assert_eq!(track.title(), "My_Song");
        assert_eq!(track.filename(), "My_Song.mp3");
        assert!(Uuid::parse_str(track.id()).is_ok());

        let view = track.view();
        assert_eq!(view.artist, UNKNOWN_ARTIST);
        assert_eq!(view.duration, "0:00");
        assert_eq!(view.album_art, None);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(Track::new("a.mp3").id(), Track::new("a.mp3").id());
    }

    #[test]
    fn test_from_info() {
        let info = TrackInfo {
            title: "Time".to_string(),
            artist: Some("Pink Floyd".to_string()),
            duration: Some(Duration::from_secs(413)),
            album_art: Some("cafe.jpg".to_string()),
        };
        let view = Track::from_info("time.mp3", info).view();

        assert_eq!(view.title, "Time");
        assert_eq!(view.artist, "Pink Floyd");
        assert_eq!(view.duration, "6:53");
        assert_eq!(view.album_art.as_deref(), Some("cafe.jpg"));
        assert_eq!(view.filename, "time.mp3");
    }

    #[test]
    fn test_view_serialization() {
        let track = Track::new("a.mp3").with_id("A").with_title("Alpha");
        let json = serde_json::to_value(track.view()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "A",
                "title": "Alpha",
                "artist": "Unknown artist",
                "filename": "a.mp3",
                "duration": "0:00",
                "album_art": null
            })
        );
    }
}
