//! Test support: a canned backend API and a running copy of the site.

use crate::config::{local_origin, Config};
use crate::routes::build_router;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Requests seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

struct MockState {
    canned: HashMap<String, (StatusCode, Option<Value>)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    pub url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub fn builder() -> MockBackendBuilder {
        MockBackendBuilder::default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[derive(Default)]
pub struct MockBackendBuilder {
    canned: HashMap<String, (StatusCode, Option<Value>)>,
}

impl MockBackendBuilder {
    /// Answer `path` with `status` and a JSON body
    pub fn respond(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.canned.insert(path.to_string(), (status, Some(body)));
        self
    }

    /// Answer `path` with `status` and no body at all
    pub fn respond_empty(mut self, path: &str, status: StatusCode) -> Self {
        self.canned.insert(path.to_string(), (status, None));
        self
    }

    pub async fn start(self) -> MockBackend {
        let state = Arc::new(MockState {
            canned: self.canned,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(record).with_state(state.clone());
        let url = serve(app).await;

        MockBackend { url, state }
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match state.canned.get(&path) {
        Some((status, Some(body))) => (*status, Json(body.clone())).into_response(),
        Some((status, None)) => (*status).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start the site against `backend_url` and return its base URL.
///
/// An empty `backend_url` makes the site call its own origin.
pub async fn start_site(backend_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = Config {
        host: addr.ip().to_string(),
        port: addr.port(),
        backend_url: backend_url.to_string(),
        public_origin: local_origin(&addr.ip().to_string(), addr.port()),
    };
    let app = build_router(Arc::new(AppState::new(&config)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An address nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
