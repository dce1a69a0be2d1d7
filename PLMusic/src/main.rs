use plmconfig::get_config;
use plmmetadata::MetadataConfigExt;
use plmplaylist::{PlaylistApiState, PlaylistConfigExt, PlaylistServerExt, SharedPlaylist};
use plmserver::{LoggingOptions, ServerBuilder};
use plmstore::{MediaStoreConfigExt, file_router};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();

    // ========== PHASE 1 : Serveur et logs ==========

    let mut server = ServerBuilder::new_configured().build();
    server
        .init_logging(LoggingOptions::from_config(&config))
        .await;

    server
        .add_route("/info", || async {
            serde_json::json!({"name": "PLMusic", "version": env!("CARGO_PKG_VERSION")})
        })
        .await;

    // ========== PHASE 2 : Stockage, extraction, playlist ==========

    info!("Initializing media store...");
    let store = config.create_media_store()?;
    info!(
        media = %store.media_dir().display(),
        covers = %store.covers_dir().display(),
        "Media store ready"
    );
    server.add_router("/", file_router(store.clone())).await;

    let extractor = Arc::new(config.create_tag_extractor(store.clone())?);
    let uploader = Arc::new(config.create_uploader(store, extractor)?);
    info!(
        extensions = ?uploader.allowed_extensions(),
        "Upload handler ready"
    );

    let playlist = SharedPlaylist::new();
    server
        .add_playlist_api(
            PlaylistApiState::new(playlist, uploader),
            config.upload_body_limit()?,
        )
        .await;

    // ========== PHASE 3 : Démarrage du serveur ==========

    info!("Starting HTTP server...");
    server.start().await?;

    info!("PLMusic is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
