mod common;

use axum::http::StatusCode;
use common::{Reply, closed_addr, spawn_service};
use serde_json::json;
use seturl::prelude::*;

const LONG_URL: &str = "https://example.com/long";

#[tokio::test]
async fn test_quick_link_success() {
    let service = spawn_service(Reply::Json(json!({
        "shortenedUrl": "https://seturl.in/q"
    })))
    .await;

    let short = service.client().get_quick_link(LONG_URL, None).await;

    assert_eq!(short, "https://seturl.in/q");
}

#[tokio::test]
async fn test_quick_link_encodes_parameters() {
    let service = spawn_service(Reply::Json(json!({
        "shortenedUrl": "https://seturl.in/q"
    })))
    .await;
    let long_url = "https://example.com/?a=1&format=xml#frag";

    service
        .client()
        .get_quick_link(long_url, Some("my alias"))
        .await;

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["url"], long_url);
    assert_eq!(requests[0]["alias"], "my alias");
    assert_eq!(requests[0]["format"], "json");
}

#[tokio::test]
async fn test_quick_link_missing_field_returns_original() {
    let service = spawn_service(Reply::Json(json!({
        "status": "error",
        "message": "invalid url"
    })))
    .await;

    let short = service.client().get_quick_link(LONG_URL, None).await;

    assert_eq!(short, LONG_URL);
}

#[tokio::test]
async fn test_quick_link_decode_failure_returns_original() {
    let service = spawn_service(Reply::Text(StatusCode::BAD_GATEWAY, "<h1>502</h1>")).await;

    let short = service.client().get_quick_link(LONG_URL, None).await;

    assert_eq!(short, LONG_URL);
}

#[tokio::test]
async fn test_quick_link_connection_refused_returns_original() {
    let client = ShortenerClient::new(common::client_config(closed_addr())).unwrap();

    let short = client.get_quick_link(LONG_URL, None).await;

    assert_eq!(short, LONG_URL);
}

#[tokio::test]
async fn test_convert_quick_link_ignores_silently_fail() {
    let service = spawn_service(Reply::Json(json!({
        "status": "error",
        "message": "invalid url"
    })))
    .await;

    let result = service
        .client()
        .convert(
            LONG_URL,
            &ConvertOptions::new().quick_link(true).silently_fail(false),
        )
        .await;

    assert_eq!(result.unwrap(), LONG_URL);
}
