//! Routes HTTP servant les fichiers du store

use crate::{Error, MediaStore, content_type_for};
use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tracing::warn;

/// Crée le router des fichiers
///
/// # Routes créées
///
/// - `GET /uploads/{filename}` - fichier audio
/// - `GET /uploads/covers/{filename}` - pochette
pub fn file_router(store: Arc<MediaStore>) -> Router {
    Router::new()
        .route("/uploads/{filename}", get(get_media))
        .route("/uploads/covers/{filename}", get(get_cover))
        .with_state(store)
}

async fn get_media(
    State(store): State<Arc<MediaStore>>,
    Path(filename): Path<String>,
) -> Response {
    match store.media_path(&filename) {
        Ok(path) => serve_file(&store, &path, &filename).await,
        Err(e) => error_response(e),
    }
}

async fn get_cover(
    State(store): State<Arc<MediaStore>>,
    Path(filename): Path<String>,
) -> Response {
    match store.cover_path(&filename) {
        Ok(path) => serve_file(&store, &path, &filename).await,
        Err(e) => error_response(e),
    }
}

async fn serve_file(store: &MediaStore, path: &std::path::Path, filename: &str) -> Response {
    match store.read(path).await {
        Ok(data) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(filename))],
            data,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: Error) -> Response {
    match error {
        Error::InvalidFilename(_) => (StatusCode::BAD_REQUEST, "Invalid filename").into_response(),
        Error::NotFound(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
        Error::Io(e) => {
            warn!("Error reading file: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading file").into_response()
        }
    }
}
