use std::fmt;
use std::future::Future;

use crate::{can, Action, AppError, RoleKind, SubjectStore};

/// Progress of a single "delete subject" request.
///
/// `Idle → Deleting → Deleted | Failed`. A failed attempt can be retried by
/// clicking again; a delete already in flight rejects further clicks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    Deleting,
    Deleted,
    Failed(String),
}

impl DeleteState {
    /// Enter `Deleting`. Returns false when a delete is already running or
    /// has already succeeded.
    pub fn begin(&mut self) -> bool {
        match self {
            DeleteState::Deleting | DeleteState::Deleted => false,
            DeleteState::Idle | DeleteState::Failed(_) => {
                *self = DeleteState::Deleting;
                true
            }
        }
    }

    pub fn succeed(&mut self) {
        *self = DeleteState::Deleted;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = DeleteState::Failed(message.into());
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, DeleteState::Deleting | DeleteState::Deleted)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DeleteState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Shared state a delete reads and writes.
///
/// `update` must not keep anything borrowed once it returns; the flow calls
/// it on both sides of the backend request.
pub trait DeleteTarget {
    fn update<R>(&mut self, f: impl FnOnce(&mut DeleteState, &mut SubjectStore) -> R) -> R;
}

/// How a delete attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend confirmed and the subject left the store.
    Deleted,
    /// The backend call failed; carries the raw error for logging.
    Failed(String),
    /// Another delete was already running, or already succeeded.
    Busy,
    /// The role may not delete; no request was made.
    NotAllowed,
}

impl DeleteOutcome {
    /// Only a confirmed delete leaves the page.
    pub fn navigates_away(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Run one delete: claim the in-flight guard, issue `request`, then either
/// drop the subject from the store or record a user-facing failure message.
/// The store is untouched unless the request succeeds.
pub async fn run_delete<T, F, Fut, E>(
    target: &mut T,
    role: RoleKind,
    id: &str,
    request: F,
) -> DeleteOutcome
where
    T: DeleteTarget,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: fmt::Display,
{
    if !can(role, Action::Delete) {
        return DeleteOutcome::NotAllowed;
    }
    if !target.update(|state, _| state.begin()) {
        return DeleteOutcome::Busy;
    }

    match request(id.to_string()).await {
        Ok(()) => {
            target.update(|state, store| {
                store.delete_subject(id);
                state.succeed();
            });
            DeleteOutcome::Deleted
        }
        Err(e) => {
            let raw = e.to_string();
            let message = AppError::friendly_message(&raw);
            target.update(|state, _| state.fail(message));
            DeleteOutcome::Failed(raw)
        }
    }
}
