use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use server::backend::BackendClient;
use shared_types::BackendConfig;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const STUDENT_TOKEN: &str = "student-token";
pub const EDITOR_TOKEN: &str = "editor-token";

/// Every request the mock backend received, as `"METHOD /path"`.
#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<Vec<String>>>);

impl Hits {
    fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.all().iter().filter(|e| e.as_str() == entry).count()
    }
}

/// A running in-process stand-in for the subjects REST backend.
pub struct MockBackend {
    pub url: String,
    pub hits: Hits,
}

impl MockBackend {
    pub fn client(&self) -> BackendClient {
        BackendClient::new(BackendConfig {
            url: self.url.clone(),
            timeout_secs: 5,
        })
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn user_for(token: &str) -> Option<Value> {
    let (id, username, role) = match token {
        ADMIN_TOKEN => (1, "root", "administrator"),
        STUDENT_TOKEN => (2, "pupil", "student"),
        EDITOR_TOKEN => (3, "tutor", "editor"),
        _ => return None,
    };
    Some(json!({
        "id": id,
        "username": username,
        "email": format!("{username}@school.test"),
        "role": { "id": id, "name": username, "type": role }
    }))
}

async fn me(State(hits): State<Hits>, headers: HeaderMap) -> Response {
    hits.record("GET /users/me".to_string());
    match bearer(&headers).and_then(user_for) {
        Some(user) => Json(user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn subjects(State(hits): State<Hits>, headers: HeaderMap) -> Response {
    hits.record("GET /subjects".to_string());
    if bearer(&headers).and_then(user_for).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {
            "id": 1,
            "name": "Physics",
            "articles": [
                { "id": 10, "name": "Optics", "createdAt": "2022-01-03T14:05:00.000Z" },
                { "id": 11, "name": "Waves", "createdAt": "2022-02-14T09:30:00.000Z" }
            ]
        },
        { "id": "2", "name": "History", "articles": [] }
    ]))
    .into_response()
}

async fn remove_subject(
    State(hits): State<Hits>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    hits.record(format!("DELETE /subjects/{id}"));
    if bearer(&headers).and_then(user_for).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id == "missing" {
        return StatusCode::NOT_FOUND.into_response();
    }
    if id == "broken" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({ "id": id })).into_response()
}

async fn rename_subject(
    State(hits): State<Hits>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    hits.record(format!("PUT /subjects/{id}"));
    if bearer(&headers).and_then(user_for).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({ "id": id, "name": body["name"], "articles": [] })).into_response()
}

async fn root() -> &'static str {
    "ok"
}

/// Start the mock backend on an ephemeral port.
pub async fn mock_backend() -> MockBackend {
    let hits = Hits::default();
    let app = Router::new()
        .route("/", get(root))
        .route("/users/me", get(me))
        .route("/subjects", get(subjects))
        .route("/subjects/{id}", delete(remove_subject).put(rename_subject))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend crashed");
    });

    MockBackend {
        url: format!("http://{addr}"),
        hits,
    }
}

/// A backend URL nothing is listening on.
pub fn unreachable_client() -> BackendClient {
    BackendClient::new(BackendConfig {
        url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
}

/// GET a path through `app`, optionally with a `jwt` cookie.
pub async fn get_page(app: &Router, uri: &str, jwt: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = jwt {
        builder = builder.header(header::COOKIE, format!("theme=dark; jwt={token}"));
    }
    let req = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.expect("Failed to send request")
}

/// Read a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8_lossy(&bytes).to_string()
}
