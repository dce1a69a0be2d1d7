use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use plmstore::{Error, MediaStore, file_router};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn create_test_store() -> (TempDir, MediaStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = MediaStore::new(
        temp_dir.path().join("uploads"),
        temp_dir.path().join("uploads").join("covers"),
    )
    .unwrap();
    (temp_dir, store)
}

#[tokio::test]
async fn test_directories_are_created() {
    let (_temp_dir, store) = create_test_store();
    assert!(store.media_dir().is_dir());
    assert!(store.covers_dir().is_dir());
}

#[tokio::test]
async fn test_save_media_sanitizes_name() {
    let (_temp_dir, store) = create_test_store();

    let stored = store.save_media("My Song.mp3", b"ID3data").await.unwrap();

    assert_eq!(stored.filename, "My_Song.mp3");
    assert_eq!(std::fs::read(&stored.path).unwrap(), b"ID3data");
    assert_eq!(store.media_path("My_Song.mp3").unwrap(), stored.path);
}

#[tokio::test]
async fn test_save_media_overwrites_same_name() {
    let (_temp_dir, store) = create_test_store();

    store.save_media("a.mp3", b"first").await.unwrap();
    let stored = store.save_media("a.mp3", b"second").await.unwrap();

    assert_eq!(std::fs::read(&stored.path).unwrap(), b"second");
}

#[tokio::test]
async fn test_save_media_rejects_empty_name() {
    let (_temp_dir, store) = create_test_store();

    let result = store.save_media("...", b"data").await;
    assert!(matches!(result, Err(Error::InvalidFilename(_))));
}

#[tokio::test]
async fn test_save_cover_generates_unique_names() {
    let (_temp_dir, store) = create_test_store();

    let first = store.save_cover(&[0xFF, 0xD8, 0xFF]).unwrap();
    let second = store.save_cover(&[0xFF, 0xD8, 0xFF]).unwrap();

    assert_ne!(first, second);
    assert!(first.ends_with(".jpg"));
    assert!(store.cover_path(&first).unwrap().exists());
}

#[tokio::test]
async fn test_file_router_serves_media() {
    let (_temp_dir, store) = create_test_store();
    store.save_media("song.mp3", b"audio").await.unwrap();
    let router = file_router(Arc::new(store));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/uploads/song.mp3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/mpeg"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"audio");
}

#[tokio::test]
async fn test_file_router_serves_covers() {
    let (_temp_dir, store) = create_test_store();
    let cover = store.save_cover(b"jpeg").unwrap();
    let router = file_router(Arc::new(store));

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/uploads/covers/{}", cover))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
}

#[tokio::test]
async fn test_file_router_missing_file() {
    let (_temp_dir, store) = create_test_store();
    let router = file_router(Arc::new(store));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/uploads/absent.mp3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_router_directory_is_not_served() {
    let (_temp_dir, store) = create_test_store();
    let router = file_router(Arc::new(store));

    // "covers" existe mais c'est un répertoire
    let response = router
        .oneshot(
            Request::builder()
                .uri("/uploads/covers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_router_rejects_unclean_names() {
    let (_temp_dir, store) = create_test_store();
    let router = file_router(Arc::new(store));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/uploads/..%2Fconfig.yaml")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
