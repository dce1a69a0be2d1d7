//! Montage de l'API playlist sur plmserver::Server

use crate::api::{PlaylistApiState, playlist_api_router};
use crate::openapi::ApiDoc;
use utoipa::OpenApi;

/// Trait pour étendre un serveur HTTP avec l'API playlist.
pub trait PlaylistServerExt {
    /// Monte l'API sous `/api` et sa documentation sur `/swagger-ui/playlist`.
    ///
    /// # Arguments
    ///
    /// * `state` - Playlist partagée et uploader
    /// * `body_limit` - Taille maximale des requêtes (octets)
    async fn add_playlist_api(&mut self, state: PlaylistApiState, body_limit: usize);
}

impl PlaylistServerExt for plmserver::Server {
    async fn add_playlist_api(&mut self, state: PlaylistApiState, body_limit: usize) {
        self.add_openapi(
            "/api",
            playlist_api_router(state, body_limit),
            ApiDoc::openapi(),
            "playlist",
        )
        .await;
    }
}
