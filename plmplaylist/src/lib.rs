//! # plmplaylist - Playlist ordonnée avec morceau courant
//!
//! Cette crate fournit :
//! - [`Playlist`] : séquence ordonnée de [`Track`] avec un curseur
//!   (insertion à une position, retrait, navigation circulaire,
//!   déplacement, reconstruction dans un ordre donné)
//! - [`SharedPlaylist`] : instance unique protégée par un verrou, injectée
//!   dans la couche HTTP
//! - [`Uploader`] : validation, stockage et extraction des fichiers reçus
//! - l'API REST `/api/...` (feature `plmserver`)
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use plmplaylist::{SharedPlaylist, Track};
//!
//! # #[tokio::main]
//! # async fn main() -> plmplaylist::Result<()> {
//! let playlist = SharedPlaylist::new();
//!
//! let first = playlist.insert(Track::new("intro.mp3"), None).await;
//! playlist.insert(Track::new("outro.mp3"), None).await;
//! playlist.insert(Track::new("middle.mp3"), Some(1)).await;
//!
//! let next = playlist.advance().await;
//! println!("Now playing: {:?}", next.map(|t| t.title));
//!
//! playlist.remove(&first).await?;
//! # Ok(())
//! # }
//! ```

mod config_ext;
mod error;
mod playlist;
mod track;
mod upload;

#[cfg(feature = "plmserver")]
pub mod api;
#[cfg(feature = "plmserver")]
pub mod openapi;
#[cfg(feature = "plmserver")]
mod plmserver_ext;

// Réexports publics
pub use config_ext::PlaylistConfigExt;
pub use error::{Error, Result};
pub use playlist::{Playlist, PlaylistState, SharedPlaylist};
pub use track::{Track, TrackView, UNKNOWN_ARTIST};
pub use upload::{DEFAULT_ALLOWED_EXTENSIONS, Uploader, parse_position};

#[cfg(feature = "plmserver")]
pub use api::{PlaylistApiState, playlist_api_router};
#[cfg(feature = "plmserver")]
pub use plmserver_ext::PlaylistServerExt;
