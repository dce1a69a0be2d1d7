//! SharedPlaylist : instance unique de la playlist, protégée par un verrou
//!
//! Chaque opération prend le verrou pour toute sa durée. Le réordonnement
//! construit la nouvelle playlist et la substitue à l'ancienne sous le même
//! verrou d'écriture : un lecteur voit l'une ou l'autre, jamais un état
//! intermédiaire.

use super::core::Playlist;
use crate::track::{Track, TrackView};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[cfg(feature = "plmserver")]
use utoipa::ToSchema;

/// Contenu complet de la playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "plmserver", derive(ToSchema))]
pub struct PlaylistState {
    pub songs: Vec<TrackView>,
    pub current: Option<TrackView>,
    pub total: usize,
}

/// Handle clonable vers la playlist active
#[derive(Debug, Clone, Default)]
pub struct SharedPlaylist {
    inner: Arc<RwLock<Playlist>>,
}

impl SharedPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks, track courant et taille
    pub async fn state(&self) -> PlaylistState {
        let playlist = self.inner.read().await;
        PlaylistState {
            songs: playlist.snapshot(),
            current: playlist.current().map(|t| t.view()),
            total: playlist.len(),
        }
    }

    pub async fn snapshot(&self) -> Vec<TrackView> {
        self.inner.read().await.snapshot()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn current(&self) -> Option<TrackView> {
        self.inner.read().await.current().map(|t| t.view())
    }

    /// Insère un track, voir [`Playlist::insert`]
    pub async fn insert(&self, track: Track, position: Option<usize>) -> String {
        self.inner.write().await.insert(track, position)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        if self.inner.write().await.remove(id) {
            Ok(())
        } else {
            Err(Error::TrackNotFound(id.to_string()))
        }
    }

    /// Track suivant, `None` si la playlist n'a pas de quoi avancer
    pub async fn advance(&self) -> Option<TrackView> {
        self.inner.write().await.advance().map(|t| t.view())
    }

    /// Track précédent, `None` si la playlist n'a pas de quoi reculer
    pub async fn retreat(&self) -> Option<TrackView> {
        self.inner.write().await.retreat().map(|t| t.view())
    }

    pub async fn set_current(&self, id: &str) -> Result<TrackView> {
        self.inner
            .write()
            .await
            .set_current(id)
            .map(|t| t.view())
            .ok_or_else(|| Error::TrackNotFound(id.to_string()))
    }

    /// Déplace un track, voir [`Playlist::move_to`]
    pub async fn move_to(&self, id: &str, position: Option<usize>) -> Result<()> {
        if self.inner.write().await.move_to(id, position) {
            debug!(track=%id, ?position, "Track moved");
            Ok(())
        } else {
            Err(Error::TrackNotFound(id.to_string()))
        }
    }

    /// Remplace la playlist par une nouvelle construite dans l'ordre `order`
    pub async fn reorder(&self, order: &[String]) {
        let mut playlist = self.inner.write().await;
        let rebuilt = playlist.reordered(order);
        info!(
            before = playlist.len(),
            after = rebuilt.len(),
            "Playlist reordered"
        );
        *playlist = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(format!("{}.mp3", id)).with_id(id)
    }

    #[tokio::test]
    async fn test_state_reports_current_and_total() {
        let shared = SharedPlaylist::new();
        shared.insert(track("A"), None).await;
        shared.insert(track("B"), None).await;

        let state = shared.state().await;
        assert_eq!(state.total, 2);
        assert_eq!(state.songs.len(), 2);
        assert_eq!(state.current.unwrap().id, "A");
    }

    #[tokio::test]
    async fn test_not_found_errors() {
        let shared = SharedPlaylist::new();

        assert!(matches!(
            shared.remove("x").await,
            Err(Error::TrackNotFound(id)) if id == "x"
        ));
        assert!(matches!(
            shared.set_current("x").await,
            Err(Error::TrackNotFound(_))
        ));
        assert!(matches!(
            shared.move_to("x", Some(0)).await,
            Err(Error::TrackNotFound(_))
        ));
        assert!(shared.advance().await.is_none());
    }

    #[tokio::test]
    async fn test_reorder_swaps_playlist() {
        let shared = SharedPlaylist::new();
        for id in ["A", "B", "C"] {
            shared.insert(track(id), None).await;
        }
        shared.set_current("B").await.unwrap();

        shared.reorder(&["C".to_string(), "B".to_string()]).await;

        let state = shared.state().await;
        let ids: Vec<_> = state.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["C", "B"]);
        assert_eq!(state.total, 2);
        assert_eq!(state.current.unwrap().id, "B");
    }

    #[tokio::test]
    async fn test_clones_share_the_same_playlist() {
        let shared = SharedPlaylist::new();
        let other = shared.clone();

        shared.insert(track("A"), None).await;
        other.reorder(&[]).await;

        assert!(shared.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_inserts() {
        let shared = SharedPlaylist::new();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let shared = shared.clone();
                tokio::spawn(async move {
                    shared.insert(track(&format!("T{}", i)), Some(0)).await;
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(shared.len().await, 32);
        assert_eq!(shared.snapshot().await.len(), 32);
    }
}
