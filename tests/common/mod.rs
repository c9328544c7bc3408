// SPDX-License-Identifier: MIT

//! Shared test harness: a mock NETRA backend on an ephemeral port.
//!
//! The mock records every request's path, query string, and authorization
//! header so tests can assert on what the client actually sent. A flag on
//! the shared state makes one stats endpoint fail, for all-or-nothing
//! fan-out tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use netra_client::{ApiClient, ClientConfig, MemorySessionStore, SessionStore};
use tracing_subscriber::EnvFilter;

/// Install the test tracing subscriber once per binary; `RUST_LOG` controls
/// what shows up. Later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The token the mock backend issues and accepts.
pub const VALID_TOKEN: &str = "tok123";

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct MockState {
    pub requests: Mutex<Vec<RecordedRequest>>,
    /// When set, GET /stats/sources answers 500.
    pub fail_sources: AtomicBool,
}

impl MockState {
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no requests recorded")
            .clone()
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

/// Start the mock backend on an ephemeral port.
pub async fn spawn_backend() -> MockBackend {
    init_tracing();
    let state = Arc::new(MockState::default());

    let app = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/profile", put(update_profile))
        .route("/api/articles", get(articles))
        .route("/api/articles/{id}", get(article))
        .route("/api/articles/{id}/vote", post(vote).delete(delete_vote))
        .route("/api/articles/{id}/comments", get(comments).post(add_comment))
        .route("/api/articles/{id}/bookmark", post(bookmark).delete(unbookmark))
        .route("/api/bookmarks", get(bookmarks))
        .route("/api/categories", get(categories))
        .route("/api/user/activity", get(activity))
        .route("/api/stats/{resource}", get(stats))
        .route("/api/health", get(health))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

/// Build a client talking to the mock, backed by a fresh in-memory store.
#[allow(dead_code)]
pub fn client_for(backend: &MockBackend) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let client = client_with_store(backend, store.clone() as Arc<dyn SessionStore>);
    (client, store)
}

/// Build a client over an arbitrary session store.
#[allow(dead_code)]
pub fn client_with_store(backend: &MockBackend, store: Arc<dyn SessionStore>) -> ApiClient {
    let config = ClientConfig::new(backend.base_url.clone());
    ApiClient::new(&config, store).expect("build client")
}

async fn record_request(State(state): State<Arc<MockState>>, req: Request, next: Next) -> Response {
    let recorded = RecordedRequest {
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    state.requests.lock().unwrap().push(recorded);
    next.run(req).await
}

fn user_json(username: &str) -> Value {
    json!({
        "id": 1,
        "username": username,
        "email": format!("{username}@example.com"),
        "created_at": "2025-01-01T00:00:00",
    })
}

fn article_json(id: u64) -> Value {
    json!({
        "id": id,
        "headline": format!("Headline {id}"),
        "author": "Jane Reporter",
        "article_link": "https://news.example.com/story",
        "source_name": "Example Wire",
        "category": "politics",
        "created_at": "2025-06-01T12:00:00",
        "vote_stats": {
            "biased": 3,
            "not_biased": 7,
            "biased_percentage": 30.0,
            "not_biased_percentage": 70.0,
        },
        "total_votes": 10,
    })
}

fn authorized(auth: Option<&str>) -> bool {
    auth.is_some_and(|v| v == format!("Bearer {VALID_TOKEN}"))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "unauthorized"}))).into_response()
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    let username = body["username"].as_str().unwrap_or("anon");
    (
        StatusCode::CREATED,
        Json(json!({
            "access_token": VALID_TOKEN,
            "user": user_json(username),
        })),
    )
}

async fn login(Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or("anon");
    if body["password"] == "secret" {
        Json(json!({
            "access_token": VALID_TOKEN,
            "user": user_json(username),
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))).into_response()
    }
}

async fn me(headers: axum::http::HeaderMap) -> Response {
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        auth if authorized(auth) => Json(json!({"user": user_json("alice")})).into_response(),
        _ => unauthorized(),
    }
}

async fn update_profile(Json(body): Json<Value>) -> impl IntoResponse {
    let username = body["username"].as_str().unwrap_or("alice");
    Json(json!({
        "message": "Profile updated",
        "user": user_json(username),
    }))
}

async fn articles() -> impl IntoResponse {
    Json(json!({
        "articles": [article_json(1), article_json(2)],
        "pagination": {"total_pages": 5, "total_items": 100},
    }))
}

/// Shape varies by id so tests can exercise the dual-shape decode:
/// 1 → wrapped envelope, 2 → bare object, 7 → neither, 500 → server error.
async fn article(Path(id): Path<u64>) -> Response {
    match id {
        2 => Json(article_json(2)).into_response(),
        7 => Json(json!({"foo": "bar"})).into_response(),
        500 => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom"})),
        )
            .into_response(),
        _ => Json(json!({"article": article_json(id)})).into_response(),
    }
}

async fn vote(Path(_id): Path<u64>, Json(body): Json<Value>) -> impl IntoResponse {
    let biased = body["is_biased"].as_bool().unwrap_or(false) as u32;
    Json(json!({
        "vote_stats": {
            "biased": 3 + biased,
            "not_biased": 7,
            "biased_percentage": 30.0,
            "not_biased_percentage": 70.0,
        }
    }))
}

async fn delete_vote(Path(_id): Path<u64>) -> impl IntoResponse {
    Json(json!({"message": "Vote removed"}))
}

async fn comments(Path(id): Path<u64>) -> impl IntoResponse {
    Json(json!({
        "comments": [
            {
                "id": 10,
                "content": format!("First on {id}"),
                "username": "bob",
                "created_at": "2025-06-02T09:00:00",
            },
            {"id": 11, "content": "Agreed", "username": "carol"},
        ]
    }))
}

async fn add_comment(Path(_id): Path<u64>, Json(body): Json<Value>) -> impl IntoResponse {
    Json(json!({
        "message": "Comment added",
        "comment": {"id": 12, "content": body["content"]},
    }))
}

async fn bookmark(Path(_id): Path<u64>) -> impl IntoResponse {
    Json(json!({"message": "Bookmarked"}))
}

async fn unbookmark(Path(_id): Path<u64>) -> impl IntoResponse {
    Json(json!({"message": "Bookmark removed"}))
}

async fn bookmarks(headers: axum::http::HeaderMap) -> Response {
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        auth if authorized(auth) => Json(json!({
            "bookmarks": [article_json(1)],
            "pagination": {"total_pages": 1, "total_items": 1},
        }))
        .into_response(),
        _ => unauthorized(),
    }
}

async fn categories() -> impl IntoResponse {
    Json(json!({
        "categories": [
            {"name": "politics", "count": 42},
            {"name": "technology", "count": 17},
        ]
    }))
}

async fn activity() -> impl IntoResponse {
    Json(json!({
        "votes": [{"article_id": 1, "is_biased": true}],
        "comments": [],
        "bookmarks": [{"article_id": 1}],
    }))
}

async fn stats(State(state): State<Arc<MockState>>, Path(resource): Path<String>) -> Response {
    if resource == "sources" && state.fail_sources.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "stats backend down"})),
        )
            .into_response();
    }
    Json(json!({"stat": resource, "value": resource.len()})).into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy"}))
}
