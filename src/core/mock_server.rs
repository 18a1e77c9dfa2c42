//! In-process LibreTranslate stand-in used by the client tests

use axum::{
    extract::{Form, State},
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Canned reply for one path
#[derive(Debug, Clone)]
pub(crate) struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// What the server saw for one request
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|(key, _)| key.as_str()).collect()
    }
}

struct MockState {
    responses: HashMap<String, MockResponse>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

/// Running mock server bound to a random local port
pub(crate) struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockServer {
    /// Start serving the given `(path, response)` pairs
    pub async fn start(routes: Vec<(&str, MockResponse)>) -> Self {
        let state = Arc::new(MockState {
            responses: routes
                .into_iter()
                .map(|(path, response)| (path.to_string(), response))
                .collect(),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Root URL without a trailing separator
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().await.clone()
    }

    pub async fn single_request(&self) -> RecordedRequest {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: axum::http::HeaderMap,
    Form(params): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let path = uri.path().to_string();

    state.recorded.lock().await.push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        params,
    });

    let response = state
        .responses
        .get(&path)
        .cloned()
        .unwrap_or_else(|| MockResponse::status(404, r#"{"error": "Not Found"}"#));

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(response.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
