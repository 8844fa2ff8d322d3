//! Local search endpoint used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// A running test server and the number of requests it has seen.
pub struct TestServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn sample_body() -> Value {
    json!({
        "query": "rust",
        "number_of_results": 3,
        "results": [
            {"title": "Rust", "url": "https://www.rust-lang.org", "description": "A language empowering everyone", "engine": "duckduckgo"},
            {"title": "The Book", "url": "https://doc.rust-lang.org/book", "description": "The Rust Programming Language"},
            {"title": "crates.io", "url": "https://crates.io", "description": ""}
        ]
    })
}

/// Starts a server on an ephemeral port with these routes under `/searx`:
///
/// - `/searx/search`: the sample body
/// - `/searx/echo/search`: one result describing the request it received
/// - `/searx/broken/search`: 500 with a plain text body
/// - `/searx/garbage/search`: 200 with a body that is not JSON
/// - `/searx/slow/search`: the sample body after five seconds
pub async fn spawn_server() -> TestServer {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/searx/search", get(results))
        .route("/searx/echo/search", get(echo))
        .route("/searx/broken/search", get(broken))
        .route("/searx/garbage/search", get(garbage))
        .route("/searx/slow/search", get(slow))
        .with_state(Arc::clone(&hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("no local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    TestServer {
        url: format!("http://{addr}/searx"),
        hits,
    }
}

async fn results(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(sample_body())
}

async fn echo(
    State(hits): State<Arc<AtomicUsize>>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "results": [{
            "title": params.get("q").cloned().unwrap_or_default(),
            "url": params.get("format").cloned().unwrap_or_default(),
            "description": raw.unwrap_or_default()
        }]
    }))
}

async fn broken(State(hits): State<Arc<AtomicUsize>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::INTERNAL_SERVER_ERROR, "database on fire")
}

async fn garbage(State(hits): State<Arc<AtomicUsize>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, "<html>not json</html>")
}

async fn slow(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(sample_body())
}
