//! Documentation OpenAPI de l'API playlist.

use utoipa::OpenApi;

/// Documentation OpenAPI pour l'API playlist.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::list_songs,
        crate::api::upload_song,
        crate::api::play_song,
        crate::api::next_song,
        crate::api::prev_song,
        crate::api::remove_song,
        crate::api::move_song,
        crate::api::reorder_playlist,
    ),
    components(
        schemas(
            crate::track::TrackView,
            crate::playlist::PlaylistState,
            crate::api::UploadForm,
            crate::api::UploadResponse,
            crate::api::SongResponse,
            crate::api::MessageResponse,
            crate::api::SuccessResponse,
            crate::api::MoveRequest,
            crate::api::ReorderRequest,
            crate::api::ReorderItem,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "playlist", description = "Gestion de la playlist et du morceau courant")
    ),
    info(
        title = "PLMusic Playlist API",
        version = "0.1.0",
        description = r#"
# Playlist

Liste ordonnée de morceaux avec un morceau courant.

- `POST /api/upload` ajoute un fichier audio (multipart `file` + `position` optionnelle)
- `GET /api/next` et `GET /api/prev` bouclent aux extrémités
- `POST /api/move` interprète `position` une fois le morceau retiré
- `POST /api/reorder` reconstruit la playlist ; les identifiants inconnus sont ignorés
        "#,
        license(
            name = "MIT",
        ),
    )
)]
pub struct ApiDoc;
