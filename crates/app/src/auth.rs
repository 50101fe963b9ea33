use dioxus::prelude::*;
use shared_types::{RoleKind, User};

/// Global authentication state, filled in by the route guard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, user: User) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The current user's role. Falls back to `Student`, the most restricted
/// role, when nobody is signed in.
pub fn use_role() -> RoleKind {
    let auth = use_auth();
    let user = auth.current_user.read();
    role_or_student(user.as_ref())
}

fn role_or_student(user: Option<&User>) -> RoleKind {
    user.map(User::role_kind).unwrap_or(RoleKind::Student)
}
