//! User and authentication payloads.

use serde::{Deserialize, Serialize};

/// User profile as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Account creation timestamp (ISO 8601)
    pub created_at: String,
}

/// Body of a successful login, register, or profile update.
///
/// The backend omits `access_token` on profile updates and may omit `user`
/// on partial responses, so both are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    /// Anything else the backend included (e.g. a message string).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Partial profile update sent to PUT /auth/profile.
///
/// Only fields that are `Some` are serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
