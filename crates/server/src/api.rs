use dioxus::prelude::*;
use shared_types::{Subject, User};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, BackendErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::state::get_backend;

// ── Auth helpers for server functions ──────────────────

/// Read the session token from the current request's cookies.
/// Returns an "Authentication required" error when there is none.
#[cfg(feature = "server")]
fn require_session() -> Result<String, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();
    cookies::extract_session_token(&parts.headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Resolve the caller and check they may perform `action`.
/// Returns the session token for the follow-up backend call.
#[cfg(feature = "server")]
async fn require_permission(action: shared_types::Action) -> Result<String, ServerFnError> {
    let token = require_session()?;
    crate::auth::authorize(get_backend(), &token, action)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(token)
}

// ── Session ────────────────────────────────────────────

/// Resolve the current user from the session cookie.
///
/// Reuses the user the auth gate already resolved for this request when
/// available. A missing cookie or a failed lookup yields `Ok(None)`.
#[server]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use crate::auth::cookies;

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => {
            tracing::debug!("get_current_user called without a request context");
            return Ok(None);
        }
    };

    let token = {
        let parts = ctx.parts_mut();
        if let Some(user) = parts.extensions.get::<User>() {
            return Ok(Some(user.clone()));
        }
        cookies::extract_session_token(&parts.headers)
    };

    let Some(token) = token else {
        return Ok(None);
    };

    match get_backend().current_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed");
            Ok(None)
        }
    }
}

// ── Subjects ───────────────────────────────────────────

/// Fetch every subject with its nested articles.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_subjects() -> Result<Vec<Subject>, ServerFnError> {
    let token = require_session()?;
    get_backend()
        .list_subjects(&token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list subjects");
            e.into_server_fn_error()
        })
}

/// Delete a subject. Administrators only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_subject(id: String) -> Result<(), ServerFnError> {
    let token = require_permission(shared_types::Action::Delete).await?;
    get_backend()
        .delete_subject(&token, &id)
        .await
        .map_err(|e| {
            tracing::error!(subject_id = %id, error = %e, "Failed to delete subject");
            e.into_server_fn_error()
        })
}

/// Rename a subject. Refused for students.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_subject(id: String, name: String) -> Result<Subject, ServerFnError> {
    use shared_types::UpdateSubjectRequest;

    let body = UpdateSubjectRequest::new(name);
    body.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let token = require_permission(shared_types::Action::Edit).await?;
    get_backend()
        .update_subject(&token, &id, &body)
        .await
        .map_err(|e| {
            tracing::error!(subject_id = %id, error = %e, "Failed to update subject");
            e.into_server_fn_error()
        })
}
