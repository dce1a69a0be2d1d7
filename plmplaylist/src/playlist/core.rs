//! Playlist : séquence ordonnée de tracks avec un curseur
//!
//! Les tracks sont rangés dans un index ordonné (`VecDeque`) et le curseur
//! est une position dans cet index, recalée à chaque insertion ou
//! suppression. Toutes les opérations sont synchrones et en O(n) au pire.

use crate::track::{Track, TrackView};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Séquence ordonnée de tracks et track courant
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: VecDeque<Arc<Track>>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nombre de tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track courant, s'il y en a un
    pub fn current(&self) -> Option<Arc<Track>> {
        self.current.and_then(|i| self.tracks.get(i).cloned())
    }

    /// Track à la position `index`
    pub fn get(&self, index: usize) -> Option<Arc<Track>> {
        self.tracks.get(index).cloned()
    }

    /// Position du premier track portant cet identifiant
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id() == id)
    }

    /// Insère un track et retourne son identifiant
    ///
    /// - playlist vide : le track devient aussi le track courant
    /// - `position` absente ou >= taille : ajout en fin
    /// - sinon : insertion avant l'élément à cette position
    pub fn insert(&mut self, track: Track, position: Option<usize>) -> String {
        let id = track.id().to_string();
        let track = Arc::new(track);

        if self.tracks.is_empty() {
            self.tracks.push_back(track);
            self.current = Some(0);
        } else {
            let index = match position {
                Some(p) if p < self.tracks.len() => p,
                _ => self.tracks.len(),
            };
            self.tracks.insert(index, track);
            if let Some(cur) = self.current.as_mut() {
                if index <= *cur {
                    *cur += 1;
                }
            }
        }

        debug!(track=%id, size=self.tracks.len(), "Track inserted");
        id
    }

    /// Retire le premier track portant cet identifiant
    ///
    /// Si c'était le track courant, le curseur passe au suivant, sinon au
    /// précédent, sinon à aucun. Retourne `false` si l'identifiant est
    /// inconnu (rien n'est modifié).
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        self.tracks.remove(index);
        self.current = match self.current {
            Some(cur) if cur == index => {
                if index < self.tracks.len() {
                    Some(index)
                } else {
                    index.checked_sub(1)
                }
            }
            Some(cur) if cur > index => Some(cur - 1),
            other => other,
        };

        debug!(track=%id, size=self.tracks.len(), "Track removed");
        true
    }

    /// Passe au track suivant, en revenant au début après le dernier
    ///
    /// Retourne `None` sans bouger si la playlist a moins de deux tracks
    /// ou pas de track courant.
    pub fn advance(&mut self) -> Option<Arc<Track>> {
        let cur = self.current?;
        let next = if cur + 1 < self.tracks.len() {
            cur + 1
        } else if self.tracks.len() > 1 {
            0
        } else {
            return None;
        };
        self.current = Some(next);
        self.current()
    }

    /// Passe au track précédent, en revenant à la fin avant le premier
    pub fn retreat(&mut self) -> Option<Arc<Track>> {
        let cur = self.current?;
        let prev = if cur > 0 {
            cur - 1
        } else if self.tracks.len() > 1 {
            self.tracks.len() - 1
        } else {
            return None;
        };
        self.current = Some(prev);
        self.current()
    }

    /// Fait du track `id` le track courant
    ///
    /// Le curseur n'est pas modifié si l'identifiant est inconnu.
    pub fn set_current(&mut self, id: &str) -> Option<Arc<Track>> {
        let index = self.position_of(id)?;
        self.current = Some(index);
        self.current()
    }

    /// Vues des tracks dans l'ordre de la playlist
    pub fn snapshot(&self) -> Vec<TrackView> {
        self.tracks.iter().map(|t| t.view()).collect()
    }

    /// Déplace un track : il est retiré puis une copie est insérée
    ///
    /// `position` est interprétée dans la séquence privée du track : pour
    /// `[A, B, C]`, déplacer `A` en 2 donne `[B, C, A]`. Comme pour
    /// [`remove`](Self::remove), déplacer le track courant passe le curseur
    /// à son voisin, sauf s'il était seul.
    pub fn move_to(&mut self, id: &str, position: Option<usize>) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        let track = Track::clone(&self.tracks[index]);
        self.remove(id);
        self.insert(track, position);
        true
    }

    /// Table identifiant → track (premier track pour un identifiant donné)
    pub fn source_tracks(&self) -> HashMap<String, Arc<Track>> {
        let mut map = HashMap::with_capacity(self.tracks.len());
        for track in &self.tracks {
            map.entry(track.id().to_string())
                .or_insert_with(|| track.clone());
        }
        map
    }

    /// Construit une nouvelle playlist dans l'ordre `order`
    ///
    /// Les identifiants absents de `source` sont ignorés. Le track courant
    /// est `current_id` s'il figure dans la nouvelle séquence, aucun sinon.
    pub fn rebuild(
        order: &[String],
        source: &HashMap<String, Arc<Track>>,
        current_id: Option<&str>,
    ) -> Self {
        let tracks: VecDeque<Arc<Track>> = order
            .iter()
            .filter_map(|id| source.get(id).cloned())
            .collect();

        let mut playlist = Self {
            tracks,
            current: None,
        };
        playlist.current = current_id.and_then(|id| playlist.position_of(id));
        playlist
    }

    /// Nouvelle playlist contenant les tracks de celle-ci dans l'ordre `order`
    pub fn reordered(&self, order: &[String]) -> Self {
        let current = self.current();
        Self::rebuild(
            order,
            &self.source_tracks(),
            current.as_ref().map(|t| t.id()),
        )
    }
}
