use crate::RoleKind;

/// Something a user can do to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Delete,
}

/// Capability check: may `role` perform `action`?
///
/// Administrators may do everything, students may only view, and every other
/// role may view and edit.
pub fn can(role: RoleKind, action: Action) -> bool {
    match (role, action) {
        (_, Action::View) => true,
        (RoleKind::Administrator, _) => true,
        (RoleKind::Student, _) => false,
        (RoleKind::Other, Action::Edit) => true,
        (RoleKind::Other, Action::Delete) => false,
    }
}

/// Header actions to render for `role`, in display order.
pub fn visible_actions(role: RoleKind) -> Vec<Action> {
    [Action::Edit, Action::Delete]
        .into_iter()
        .filter(|a| can(role, *a))
        .collect()
}
