#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use seturl::prelude::*;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// What the stand-in API answers on `/api`.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Text(StatusCode, &'static str),
}

#[derive(Clone)]
struct ServiceState {
    reply: Reply,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A local stand-in for the shortening API.
pub struct TestService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl TestService {
    /// Query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> ShortenerClient {
        ShortenerClient::new(client_config(self.addr)).unwrap()
    }
}

async fn api_handler(
    State(state): State<ServiceState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(params);

    match state.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Text(status, body) => (status, body).into_response(),
    }
}

pub async fn spawn_service(reply: Reply) -> TestService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = ServiceState {
        reply,
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/api", get(api_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestService { addr, requests }
}

pub fn client_config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new("test-key")
        .base_host(addr.to_string())
        .scheme(Scheme::Http)
}

/// Returns an address nothing is listening on.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
