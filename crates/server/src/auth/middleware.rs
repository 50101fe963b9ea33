use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::cookies;
use super::is_protected_path;
use crate::backend::BackendClient;

/// Route unauthenticated visitors are sent to.
pub const HOME_PATH: &str = "/";

/// Access gate for full page loads.
///
/// For protected page paths, resolves the `jwt` cookie through
/// `GET /users/me` before anything renders. On success the `User` is inserted
/// into request extensions, where `get_current_user` and the trace layer pick
/// it up. A missing cookie or a failed lookup short-circuits with a temporary
/// redirect to `/`; the page, and every fetch it would trigger, never runs.
///
/// Other paths (home, assets, server functions) pass through untouched;
/// server functions authenticate themselves from the cookie.
pub async fn auth_gate(
    State(backend): State<BackendClient>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if !is_protected_path(&path) {
        return next.run(req).await;
    }

    let Some(token) = cookies::extract_session_token(req.headers()) else {
        tracing::info!(path = %path, "No session cookie, redirecting home");
        return Redirect::temporary(HOME_PATH).into_response();
    };

    match backend.current_user(&token).await {
        Ok(user) => {
            tracing::debug!(path = %path, user = %user.username, "Session resolved");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Session lookup failed, redirecting home");
            Redirect::temporary(HOME_PATH).into_response()
        }
    }
}
