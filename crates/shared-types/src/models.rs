use serde::{Deserialize, Deserializer, Serialize};

/// Role kind controlling which subject actions a user sees.
///
/// - `Student`: read-only access.
/// - `Administrator`: full access, including deleting subjects.
/// - `Other`: any other authenticated role (editors, tutors); may edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RoleKind {
    Administrator,
    Student,
    #[default]
    Other,
}

impl RoleKind {
    /// Parse the backend's `role.type` string, matched exactly. Anything
    /// else, including other casings, maps to `Other`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "administrator" => RoleKind::Administrator,
            "student" => RoleKind::Student,
            _ => RoleKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Administrator => "administrator",
            RoleKind::Student => "student",
            RoleKind::Other => "other",
        }
    }
}

/// The role object nested in a user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Role {
    #[serde(default)]
    pub name: String,
    /// Raw role type as reported by the backend, e.g. `"administrator"`.
    #[serde(rename = "type", default)]
    pub role_type: String,
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        RoleKind::from_str_or_default(&self.role_type)
    }
}

/// The authenticated user as returned by `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn role_kind(&self) -> RoleKind {
        self.role.kind()
    }
}

/// An article linked to exactly one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    /// RFC 3339 creation timestamp, kept verbatim for display formatting.
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: String,
}

/// A named subject owning an ordered list of articles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Backends disagree on numeric vs string identifiers; routes always carry
/// strings, so normalize on the way in.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
