//! Integration tests for the catalog endpoint.

mod common;

use common::TestHarness;

use matinee_core::config::Config;
use matinee_server::context::AppContext;
use matinee_server::router::build_router;

#[tokio::test]
async fn empty_directory_returns_empty_array() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/movies-list"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let movies: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(movies, serde_json::json!([]));
}

#[tokio::test]
async fn catalog_pairs_thumbnails_and_filters() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_file("movie.mp4", b"v");
    h.add_file("moviethumbnail.png", b"p");
    h.add_file("song.mp3", b"a");
    h.add_file("notes.txt", b"t");
    std::fs::create_dir(h.media_root().join("extras")).unwrap();

    let resp = reqwest::get(format!("http://{addr}/movies-list"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let movies: serde_json::Value = resp.json().await.unwrap();
    let movies = movies.as_array().unwrap();
    // Only the two playable files; the thumbnail, text file, and
    // subdirectory are not catalog entries.
    assert_eq!(movies.len(), 2);

    let movie = movies.iter().find(|m| m["title"] == "movie").unwrap();
    assert_eq!(movie["video"], "/watch/movie.mp4");
    assert_eq!(movie["thumbnail"], "/movies/moviethumbnail.png");

    let song = movies.iter().find(|m| m["title"] == "song").unwrap();
    assert_eq!(song["video"], "/watch/song.mp3");
    assert!(song["thumbnail"].is_null());
}

#[tokio::test]
async fn catalog_url_encodes_file_names() {
    let (h, addr) = TestHarness::with_server().await;
    h.add_file("My Movie.mp4", b"v");
    h.add_file("My Moviethumbnail.png", b"p");

    let resp = reqwest::get(format!("http://{addr}/movies-list"))
        .await
        .unwrap();
    let movies: serde_json::Value = resp.json().await.unwrap();
    let entry = &movies.as_array().unwrap()[0];

    assert_eq!(entry["title"], "My Movie");
    assert_eq!(entry["video"], "/watch/My%20Movie.mp4");
    assert_eq!(entry["thumbnail"], "/movies/My%20Moviethumbnail.png");
}

#[tokio::test]
async fn unreadable_media_dir_returns_500() {
    // Point the library at a regular file so the directory read fails.
    let file = tempfile::NamedTempFile::new().unwrap();

    let mut config = Config::default();
    config.library.media_dir = file.path().to_path_buf();
    config.server.static_dir = None;
    let app = build_router(AppContext::new(config), None);
    let addr = common::serve_router(app).await;

    let resp = reqwest::get(format!("http://{addr}/movies-list"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), "Error reading movies directory");
}
