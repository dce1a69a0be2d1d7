//! API REST de la playlist.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, Path, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::playlist::{PlaylistState, SharedPlaylist};
use crate::track::TrackView;
use crate::upload::Uploader;
use crate::Error;

/// Message renvoyé par next/prev quand il n'y a pas de morceau où aller
pub const NO_SONGS_MESSAGE: &str = "No songs in the playlist";

/// État partagé par les handlers
#[derive(Clone)]
pub struct PlaylistApiState {
    pub playlist: SharedPlaylist,
    pub uploader: Arc<Uploader>,
}

impl PlaylistApiState {
    pub fn new(playlist: SharedPlaylist, uploader: Arc<Uploader>) -> Self {
        Self { playlist, uploader }
    }
}

/// Router de l'API playlist (à monter sous `/api`)
///
/// `body_limit` borne la taille des requêtes, upload compris.
pub fn playlist_api_router(state: PlaylistApiState, body_limit: usize) -> Router {
    Router::new()
        .route("/songs", get(list_songs))
        .route("/upload", post(upload_song))
        .route("/play/{song_id}", get(play_song))
        .route("/next", get(next_song))
        .route("/prev", get(prev_song))
        .route("/remove/{song_id}", delete(remove_song))
        .route("/move", post(move_song))
        .route("/reorder", post(reorder_playlist))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Formulaire d'upload (documentation uniquement).
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// Fichier audio (mp3, wav, ogg, m4a)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Position d'insertion (0 = en tête, absente = à la fin)
    pub position: Option<usize>,
}

/// Réponse à un upload réussi.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub song_id: String,
}

/// Réponse portant un morceau.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SongResponse {
    pub success: bool,
    pub song: TrackView,
}

/// Réponse sans morceau (navigation impossible).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Réponse d'une opération sans contenu.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Requête de déplacement d'un morceau.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveRequest {
    pub song_id: String,
    /// Position dans la playlist privée du morceau déplacé (absente = à la fin)
    #[schema(example = 0)]
    pub position: Option<i64>,
}

/// Requête de réordonnement complet.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReorderRequest {
    #[serde(default)]
    pub order: Vec<ReorderItem>,
}

/// Élément de l'ordre demandé.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReorderItem {
    #[serde(rename = "songId")]
    pub song_id: String,
}

/// Réponse d'erreur REST générique.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/songs",
    tag = "playlist",
    responses(
        (status = 200, description = "Morceaux, morceau courant et total", body = PlaylistState)
    )
)]
pub async fn list_songs(State(state): State<PlaylistApiState>) -> Json<PlaylistState> {
    Json(state.playlist.state().await)
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "playlist",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Morceau ajouté", body = UploadResponse),
        (status = 400, description = "Fichier absent, extension ou position invalide", body = ErrorResponse),
        (status = 413, description = "Fichier trop volumineux", body = ErrorResponse)
    )
)]
pub async fn upload_song(
    State(state): State<PlaylistApiState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            return map_status(
                StatusCode::BAD_REQUEST,
                "INVALID_MULTIPART",
                rejection.body_text(),
            );
        }
    };

    let mut file: Option<(String, Vec<u8>)> = None;
    let mut position: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return map_multipart_error(e),
        };

        match field.name().map(str::to_string).as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => file = Some((filename, data.to_vec())),
                    Err(e) => return map_multipart_error(e),
                }
            }
            Some("position") => match field.text().await {
                Ok(text) => position = Some(text),
                Err(e) => return map_multipart_error(e),
            },
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return map_error(Error::MissingFile);
    };

    match state
        .uploader
        .upload(&state.playlist, &filename, &data, position.as_deref())
        .await
    {
        Ok(song_id) => Json(UploadResponse {
            success: true,
            song_id,
        })
        .into_response(),
        Err(e) => map_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/play/{song_id}",
    tag = "playlist",
    params(
        ("song_id" = String, Path, description = "Identifiant du morceau")
    ),
    responses(
        (status = 200, description = "Morceau devenu courant", body = SongResponse),
        (status = 404, description = "Morceau introuvable", body = ErrorResponse)
    )
)]
pub async fn play_song(
    State(state): State<PlaylistApiState>,
    Path(song_id): Path<String>,
) -> Response {
    match state.playlist.set_current(&song_id).await {
        Ok(song) => Json(SongResponse {
            success: true,
            song,
        })
        .into_response(),
        Err(e) => map_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/next",
    tag = "playlist",
    responses(
        (status = 200, description = "Morceau suivant, ou `success: false` si la playlist ne permet pas d'avancer", body = SongResponse)
    )
)]
pub async fn next_song(State(state): State<PlaylistApiState>) -> Response {
    navigation_response(state.playlist.advance().await)
}

#[utoipa::path(
    get,
    path = "/api/prev",
    tag = "playlist",
    responses(
        (status = 200, description = "Morceau précédent, ou `success: false` si la playlist ne permet pas de reculer", body = SongResponse)
    )
)]
pub async fn prev_song(State(state): State<PlaylistApiState>) -> Response {
    navigation_response(state.playlist.retreat().await)
}

#[utoipa::path(
    delete,
    path = "/api/remove/{song_id}",
    tag = "playlist",
    params(
        ("song_id" = String, Path, description = "Identifiant du morceau")
    ),
    responses(
        (status = 200, description = "Morceau retiré", body = SuccessResponse),
        (status = 404, description = "Morceau introuvable", body = ErrorResponse)
    )
)]
pub async fn remove_song(
    State(state): State<PlaylistApiState>,
    Path(song_id): Path<String>,
) -> Response {
    match state.playlist.remove(&song_id).await {
        Ok(()) => Json(SuccessResponse { success: true }).into_response(),
        Err(e) => map_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/move",
    tag = "playlist",
    request_body = MoveRequest,
    responses(
        (status = 200, description = "Morceau déplacé", body = SuccessResponse),
        (status = 400, description = "Requête invalide", body = ErrorResponse),
        (status = 404, description = "Morceau introuvable", body = ErrorResponse)
    )
)]
pub async fn move_song(
    State(state): State<PlaylistApiState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return map_status(
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                rejection.body_text(),
            );
        }
    };

    let position = match req.position {
        None => None,
        Some(p) => match usize::try_from(p) {
            Ok(p) => Some(p),
            Err(_) => return map_error(Error::InvalidPosition(p.to_string())),
        },
    };

    match state.playlist.move_to(&req.song_id, position).await {
        Ok(()) => Json(SuccessResponse { success: true }).into_response(),
        Err(e) => map_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/reorder",
    tag = "playlist",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Playlist reconstruite dans l'ordre donné", body = SuccessResponse),
        (status = 400, description = "Corps de requête mal formé", body = ErrorResponse)
    )
)]
pub async fn reorder_playlist(
    State(state): State<PlaylistApiState>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return map_error(Error::MalformedReorder(rejection.body_text())),
    };

    let order: Vec<String> = req.order.into_iter().map(|item| item.song_id).collect();
    state.playlist.reorder(&order).await;
    Json(SuccessResponse { success: true }).into_response()
}

fn navigation_response(song: Option<TrackView>) -> Response {
    match song {
        Some(song) => Json(SongResponse {
            success: true,
            song,
        })
        .into_response(),
        None => (
            StatusCode::OK,
            Json(MessageResponse {
                success: false,
                message: NO_SONGS_MESSAGE.to_string(),
            }),
        )
            .into_response(),
    }
}

fn map_status<S: Into<String>>(status: StatusCode, error: &str, message: S) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

fn map_multipart_error(error: MultipartError) -> Response {
    warn!("Error reading multipart field: {}", error);
    map_status(error.status(), "INVALID_MULTIPART", error.body_text())
}

fn map_error(error: Error) -> Response {
    let (status, code) = match &error {
        Error::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
        Error::EmptyFilename => (StatusCode::BAD_REQUEST, "EMPTY_FILENAME"),
        Error::UnsupportedExtension(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_EXTENSION"),
        Error::InvalidPosition(_) => (StatusCode::BAD_REQUEST, "INVALID_POSITION"),
        Error::MalformedReorder(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REORDER"),
        Error::Store(plmstore::Error::InvalidFilename(_)) => {
            (StatusCode::BAD_REQUEST, "INVALID_FILENAME")
        }
        Error::TrackNotFound(_) => (StatusCode::NOT_FOUND, "TRACK_NOT_FOUND"),
        Error::Store(_) | Error::Other(_) => {
            error!("Playlist request failed: {}", error);
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    map_status(status, code, error.to_string())
}
