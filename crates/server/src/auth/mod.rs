pub mod cookies;
pub mod middleware;

use shared_types::{can, Action, AppError, User};

use crate::backend::BackendClient;

/// Resolve the session token to a user and check they may perform `action`.
///
/// Refuses with `Forbidden` before the caller issues any mutating request.
pub async fn authorize(
    backend: &BackendClient,
    token: &str,
    action: Action,
) -> Result<User, AppError> {
    let user = backend.current_user(token).await?;

    if !can(user.role_kind(), action) {
        tracing::warn!(user = %user.username, role = user.role_kind().as_str(), ?action, "Permission denied");
        return Err(AppError::forbidden(format!(
            "The {} role cannot perform this action",
            user.role_kind().as_str()
        )));
    }
    Ok(user)
}

/// Page paths that require a resolved user before rendering.
pub fn is_protected_path(path: &str) -> bool {
    path == "/subjects"
        || path.starts_with("/subjects/")
        || path == "/articles"
        || path.starts_with("/articles/")
}
