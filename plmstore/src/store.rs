//! MediaStore : fichiers audio envoyés et pochettes extraites

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Fichier audio enregistré dans le store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Nom nettoyé, utilisable comme référence stable
    pub filename: String,
    /// Chemin absolu du fichier sur disque
    pub path: PathBuf,
}

/// Stockage disque des médias et des pochettes
///
/// Les références retournées sont de simples noms de fichiers : elles ne
/// contiennent jamais de séparateur de chemin et restent valides tant que
/// le fichier n'est pas écrasé par un upload du même nom.
#[derive(Debug, Clone)]
pub struct MediaStore {
    media_dir: PathBuf,
    covers_dir: PathBuf,
}

impl MediaStore {
    /// Crée le store et ses deux répertoires s'ils n'existent pas
    pub fn new(media_dir: impl Into<PathBuf>, covers_dir: impl Into<PathBuf>) -> Result<Self> {
        let media_dir = media_dir.into();
        let covers_dir = covers_dir.into();

        for dir in [&media_dir, &covers_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                info!(directory=%dir.display(), "Created media directory");
            }
        }

        Ok(Self {
            media_dir,
            covers_dir,
        })
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    pub fn covers_dir(&self) -> &Path {
        &self.covers_dir
    }

    /// Chemin d'un média à partir de sa référence
    ///
    /// Refuse toute référence qui ne survit pas intacte au nettoyage
    /// (`../`, séparateurs, caractères non ASCII...).
    pub fn media_path(&self, filename: &str) -> Result<PathBuf> {
        Ok(self.media_dir.join(checked_name(filename)?))
    }

    /// Chemin d'une pochette à partir de sa référence
    pub fn cover_path(&self, filename: &str) -> Result<PathBuf> {
        Ok(self.covers_dir.join(checked_name(filename)?))
    }

    /// Enregistre un fichier audio sous son nom nettoyé
    ///
    /// Un fichier existant portant le même nom est remplacé.
    pub async fn save_media(&self, original_name: &str, data: &[u8]) -> Result<StoredMedia> {
        let filename = sanitize_filename(original_name);
        if filename.is_empty() {
            return Err(Error::InvalidFilename(original_name.to_string()));
        }

        let path = self.media_dir.join(&filename);
        tokio::fs::write(&path, data).await?;
        debug!(file=%path.display(), size=data.len(), "Media saved");

        Ok(StoredMedia { filename, path })
    }

    /// Enregistre une pochette JPEG sous un nom unique et retourne sa référence
    ///
    /// Synchrone : appelée depuis le thread bloquant de l'extraction.
    pub fn save_cover(&self, jpeg: &[u8]) -> Result<String> {
        let filename = format!("{}.jpg", Uuid::new_v4().simple());
        let path = self.covers_dir.join(&filename);
        fs::write(&path, jpeg)?;
        debug!(file=%path.display(), size=jpeg.len(), "Cover saved");
        Ok(filename)
    }

    /// Lit le contenu d'un fichier du store
    pub async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(tokio::fs::read(path).await?),
            Ok(_) => Err(Error::NotFound(path.display().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn checked_name(filename: &str) -> Result<&str> {
    if filename.is_empty() || sanitize_filename(filename) != filename {
        return Err(Error::InvalidFilename(filename.to_string()));
    }
    Ok(filename)
}

/// Nettoie un nom de fichier fourni par un client
///
/// - seuls les caractères ASCII sont conservés
/// - les séparateurs de chemin deviennent des espaces
/// - les suites d'espaces sont remplacées par `_`
/// - seuls `[A-Za-z0-9_.-]` sont gardés
/// - les `.` et `_` en début et fin sont retirés
///
/// Le résultat peut être vide : c'est à l'appelant de le refuser.
pub fn sanitize_filename(name: &str) -> String {
    let ascii: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Type MIME déduit de l'extension
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_filename("song.mp3"), "song.mp3");
        assert_eq!(sanitize_filename("My-Track_01.ogg"), "My-Track_01.ogg");
    }

    #[test]
    fn test_sanitize_whitespace_and_separators() {
        assert_eq!(sanitize_filename("my cool  song.mp3"), "my_cool_song.mp3");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("C:\\music\\a.wav"), "C_music_a.wav");
    }

    #[test]
    fn test_sanitize_strips_non_ascii_and_specials() {
        assert_eq!(sanitize_filename("canción.mp3"), "cancin.mp3");
        assert_eq!(sanitize_filename("a&b(1).mp3"), "ab1.mp3");
        assert_eq!(sanitize_filename("._hidden.mp3_"), "hidden.mp3");
    }

    #[test]
    fn test_sanitize_can_be_empty() {
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename("日本"), "");
    }

    #[test]
    fn test_checked_name() {
        assert!(checked_name("song.mp3").is_ok());
        assert!(checked_name("../song.mp3").is_err());
        assert!(checked_name("").is_err());
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type_for("a.MP3"), "audio/mpeg");
        assert_eq!(content_type_for("cover.jpg"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
