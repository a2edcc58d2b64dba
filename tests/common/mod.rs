//! Local stand-in for the AniList endpoint.

#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubUpstream {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn reply(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(CapturedRequest {
        headers,
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
}

pub async fn spawn_upstream_raw(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<String>,
) -> StubUpstream {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        content_type,
        body: body.into(),
        requests: requests.clone(),
    };

    let app = Router::new().route("/", post(reply)).with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        url: format!("http://{addr}/"),
        requests,
    }
}

pub async fn spawn_upstream(body: serde_json::Value) -> StubUpstream {
    spawn_upstream_raw(StatusCode::OK, "application/json", body.to_string()).await
}

/// Address that refuses connections: bound once, then released.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub fn example_media() -> serde_json::Value {
    serde_json::json!({
        "episodes": 12,
        "seasonInt": 231,
        "coverImage": { "large": "https://s4.anilist.co/file/cover/large/example.jpg" },
        "title": { "english": "Example Anime" },
        "genres": ["Action", "Adventure", "Fantasy"],
        "startDate": { "year": 2023 },
        "description": "A <br> description with <i>markup</i>."
    })
}
