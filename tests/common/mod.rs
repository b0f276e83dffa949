#![allow(dead_code)]

//! Shared test harness: an in-process fake shortener backend served over a
//! real socket, so the dashboard's reqwest client path is exercised end to
//! end, and a `TestServer` wrapping the real dashboard router.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use serde_json::Value;

use shortlink_dashboard::prelude::*;
use shortlink_dashboard::routes;

/// Mutable state behind the fake backend.
#[derive(Default)]
pub struct BackendState {
    pub links: Mutex<Vec<Link>>,
    /// When set, every endpoint answers 500.
    pub fail_all: AtomicBool,
    /// JSON body of the most recent create request, for wire assertions.
    pub last_create_body: Mutex<Option<Value>>,
    counter: AtomicUsize,
}

/// Handle to a running fake backend.
pub struct FakeBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

impl FakeBackend {
    /// Seeds a link created two hours ago with no clicks recorded.
    pub fn seed(&self, code: &str, url: &str, clicks: i64) {
        self.seed_link(Link {
            short_code: code.to_string(),
            original_url: url.to_string(),
            clicks,
            created_at: Utc::now() - ChronoDuration::hours(2),
            last_clicked_at: None,
        });
    }

    /// Seeds a link with a fixed, assertable timestamp.
    pub fn seed_fixed(&self, code: &str, url: &str, clicks: i64, clicked: bool) {
        self.seed_link(Link {
            short_code: code.to_string(),
            original_url: url.to_string(),
            clicks,
            created_at: Utc.with_ymd_and_hms(2025, 4, 2, 15, 4, 5).unwrap(),
            last_clicked_at: clicked
                .then(|| Utc.with_ymd_and_hms(2025, 4, 3, 8, 30, 0).unwrap()),
        });
    }

    pub fn seed_link(&self, link: Link) {
        self.state.links.lock().unwrap().push(link);
    }

    pub fn has(&self, code: &str) -> bool {
        self.state
            .links
            .lock()
            .unwrap()
            .iter()
            .any(|link| link.short_code == code)
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.fail_all.store(failing, Ordering::SeqCst);
    }

    pub fn last_create_body(&self) -> Option<Value> {
        self.state.last_create_body.lock().unwrap().clone()
    }
}

/// Binds the fake backend on an ephemeral port and serves it in the
/// background for the rest of the test.
pub async fn spawn_backend() -> FakeBackend {
    let state = Arc::new(BackendState::default());

    let app = Router::new()
        .route("/links", get(list_links).post(create_link))
        .route("/links/{code}", get(get_link).delete(delete_link))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Builds a `TestServer` over the real dashboard router, pointed at the
/// given fake backend.
pub fn make_server(backend: &FakeBackend) -> TestServer {
    let api = HttpLinksApi::new(&backend.base_url, Duration::from_secs(5)).unwrap();
    let state = AppState::new(Arc::new(api), backend.base_url.clone());
    TestServer::new(routes::router(state)).unwrap()
}

async fn list_links(State(state): State<Arc<BackendState>>) -> Response {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let links = state.links.lock().unwrap().clone();
    Json(links).into_response()
}

async fn create_link(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    *state.last_create_body.lock().unwrap() = Some(body.clone());

    let url = body["url"].as_str().unwrap_or_default().to_string();
    let requested = body
        .get("shortCode")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut links = state.links.lock().unwrap();

    if let Some(code) = &requested {
        if links.iter().any(|link| &link.short_code == code) {
            return StatusCode::CONFLICT.into_response();
        }
    }

    let code = requested
        .unwrap_or_else(|| format!("gen{}", state.counter.fetch_add(1, Ordering::SeqCst) + 1));

    let link = Link {
        short_code: code,
        original_url: url,
        clicks: 0,
        created_at: Utc::now(),
        last_clicked_at: None,
    };

    // Appended, not prepended: the dashboard is responsible for showing the
    // new record first.
    links.push(link.clone());

    (StatusCode::CREATED, Json(link)).into_response()
}

async fn get_link(State(state): State<Arc<BackendState>>, Path(code): Path<String>) -> Response {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let links = state.links.lock().unwrap();
    match links.iter().find(|link| link.short_code == code) {
        Some(link) => Json(link.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_link(State(state): State<Arc<BackendState>>, Path(code): Path<String>) -> Response {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let mut links = state.links.lock().unwrap();
    let before = links.len();
    links.retain(|link| link.short_code != code);

    if links.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
