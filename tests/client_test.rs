use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use spdump::{
    Error, cli,
    config::Credentials,
    spotify::{Endpoints, Resource, SpotifyClient},
};

// base64("client-id:client-secret")
const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";
const TOKEN: &str = "test-token";

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn credentials() -> Credentials {
    Credentials::new("client-id", "client-secret")
}

fn endpoints(base: &str) -> Endpoints {
    Endpoints::new(format!("{base}/v1"), format!("{base}/api/token"))
}

async fn token_ok(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(BASIC_AUTH);
    if !authorized || form.get("grant_type").map(String::as_str) != Some("client_credentials") {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "invalid_client"})));
    }

    (
        StatusCode::OK,
        Json(json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600})),
    )
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer test-token")
}

fn road_trip() -> Value {
    json!({
        "name": "Road Trip",
        "id": "abc123",
        "images": [],
        "tracks": {"items": [{"track": {
            "name": "Song A",
            "id": "t1",
            "external_urls": {"spotify": "url1"},
            "album": {"name": "Al1", "images": [], "release_date": "2020-01-01"},
            "artists": [{"name": "Artist X"}]
        }}], "total": 1}
    })
}

fn api_router() -> Router {
    Router::new()
        .route("/api/token", post(token_ok))
        .route(
            "/v1/playlists/{id}",
            get(|Path(id): Path<String>, headers: HeaderMap| async move {
                if !bearer_ok(&headers) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({})));
                }
                match id.as_str() {
                    "abc123" => (StatusCode::OK, Json(road_trip())),
                    _ => (
                        StatusCode::NOT_FOUND,
                        Json(json!({"error": {"status": 404, "message": "Resource not found"}})),
                    ),
                }
            }),
        )
        .route(
            "/v1/tracks/{id}",
            get(|Path(id): Path<String>| async move {
                Json(json!({
                    "name": "Solo",
                    "id": id,
                    "preview_url": null,
                    "album": {"name": "Single", "release_date": "2001", "images": [{"url": "i", "height": 64, "width": 64}]},
                    "artists": [{"name": "One", "id": "1"}, {"name": "Two", "id": "2"}]
                }))
            }),
        )
        .route(
            "/v1/albums/{id}",
            get(|| async { (StatusCode::OK, "{\"name\": \"broken\", \"tracks\": ") }),
        )
        .route(
            "/v1/users/{id}/playlists",
            get(|| async {
                Json(json!({"items": [
                    {"name": "First", "id": "p1", "tracks": {"href": "x", "total": 3}},
                    {"name": "Second", "id": "p2", "tracks": {"href": "y", "total": 0}}
                ], "total": 2}))
            }),
        )
        .route(
            "/v1/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let echoed = format!(
                    "{}|{}|{}|{}",
                    params.get("q").cloned().unwrap_or_default(),
                    params.get("type").cloned().unwrap_or_default(),
                    params.get("market").cloned().unwrap_or_default(),
                    params.get("limit").cloned().unwrap_or_default(),
                );
                Json(json!({
                    "tracks": {"items": [{"name": echoed, "id": "t"}]},
                    "albums": {"items": []},
                    "playlists": {"items": [null]}
                }))
            }),
        )
}

#[tokio::test]
async fn test_playlist_end_to_end() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    let mut out = Vec::new();
    cli::playlist(&client, "abc123", false, &mut out).await.unwrap();

    let printed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["Name"], "Road Trip");
    assert_eq!(printed["IntegrationID"], "abc123");
    assert_eq!(printed["Tracks"].as_array().unwrap().len(), 1);
    assert_eq!(printed["Tracks"][0]["Name"], "Song A");
    assert_eq!(printed["Tracks"][0]["AlbumName"], "Al1");
    assert_eq!(printed["Tracks"][0]["AlbumReleaseDate"], "2020-01-01");
    assert_eq!(printed["Tracks"][0]["ExternalURL"], "url1");
    assert_eq!(printed["Tracks"][0]["Source"], "spotify");
    assert_eq!(printed["Tracks"][0]["Artists"], "Artist X");
}

#[tokio::test]
async fn test_token_rejection_prevents_any_fetch() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fetches);
    let app = Router::new()
        .route(
            "/api/token",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_client"}))) }),
        )
        .route(
            "/v1/playlists/{id}",
            get(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(road_trip())
                }
            }),
        );
    let base = spawn(app).await;

    let result = SpotifyClient::connect(credentials(), endpoints(&base)).await;
    assert!(matches!(result, Err(Error::Auth(_))));
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_access_token_is_auth_error() {
    let app = Router::new().route(
        "/api/token",
        post(|| async { Json(json!({"access_token": "", "token_type": "Bearer"})) }),
    );
    let base = spawn(app).await;

    match SpotifyClient::connect(credentials(), endpoints(&base)).await {
        Err(Error::Auth(msg)) => assert!(msg.contains("malformed token response")),
        Err(other) => panic!("expected auth error, got {other:?}"),
        Ok(_) => panic!("expected auth error, got a client"),
    }
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected() {
    let base = spawn(api_router()).await;
    let result = SpotifyClient::connect(Credentials::new("client-id", "nope"), endpoints(&base)).await;
    assert!(matches!(result, Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_auth_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = SpotifyClient::connect(credentials(), endpoints(&format!("http://{addr}"))).await;
    assert!(matches!(result, Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_not_found_is_fetch_error_naming_resource_and_id() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    match client.playlist("missing").await {
        Err(Error::Fetch { resource, id, reason }) => {
            assert_eq!(resource, Resource::Playlist);
            assert_eq!(id, "missing");
            assert!(reason.contains("404"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    match client.album("a1").await {
        Err(Error::Decode { resource, id, .. }) => {
            assert_eq!(resource, Resource::Album);
            assert_eq!(id, "a1");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_track_command_output() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    let mut out = Vec::new();
    cli::track(&client, "t9", false, &mut out).await.unwrap();

    let printed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["IntegrationID"], "t9");
    assert_eq!(printed["PreviewURL"], "");
    assert_eq!(printed["Artists"], "One, Two");
    assert_eq!(printed["AlbumArt"][0]["url"], "i");
}

#[tokio::test]
async fn test_user_playlists_prints_one_name_per_line() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    let mut out = Vec::new();
    cli::user_playlists(&client, "someone", &mut out).await.unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "First\nSecond\n");
}

#[tokio::test]
async fn test_search_sends_expected_query() {
    let base = spawn(api_router()).await;
    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();

    let response = client.search("daft punk", "").await.unwrap();
    assert_eq!(
        response.tracks.items[0].name,
        "daft punk|track,album,playlist|US|50"
    );
    assert!(response.playlists.items.is_empty());
}

#[tokio::test]
async fn test_expired_token_is_renewed_before_fetch() {
    let grants = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&grants);
    let app = Router::new()
        .route(
            "/api/token",
            post(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    // Shorter than the renewal buffer, so every use renews
                    Json(json!({"access_token": TOKEN, "expires_in": 10}))
                }
            }),
        )
        .route("/v1/playlists/{id}", get(|| async { Json(road_trip()) }));
    let base = spawn(app).await;

    let client = SpotifyClient::connect(credentials(), endpoints(&base))
        .await
        .unwrap();
    assert_eq!(grants.load(Ordering::SeqCst), 1);

    client.playlist("abc123").await.unwrap();
    assert_eq!(grants.load(Ordering::SeqCst), 2);
}
