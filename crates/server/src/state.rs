use axum::extract::FromRef;
use std::sync::OnceLock;

use crate::backend::BackendClient;

/// Shared application state passed to Axum handlers and middleware via `State`.
/// Derives `FromRef` so handlers can extract `State<BackendClient>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn from_config() -> Self {
        Self {
            backend: get_backend().clone(),
        }
    }
}

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

/// Get or build the process-wide backend client from the loaded config.
///
/// Used by Dioxus server functions (`api.rs`); axum handlers take
/// `State<BackendClient>` instead.
pub fn get_backend() -> &'static BackendClient {
    BACKEND.get_or_init(|| BackendClient::new(crate::config::config().backend.clone()))
}
