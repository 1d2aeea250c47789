use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Authenticated account details held by the client session store.
pub struct AccountInfo {
    /// Stable account identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    /// Profile picture URL, if the account has set one.
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AccountInfo {
    /// Uppercase initial used for avatar placeholders.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to the session store.
pub struct LoginRequest {
    pub email: String,
    /// Plaintext password. The demo directory accepts any non-empty value.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Self-service signup payload.
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Requested role; must be in [`Role::self_signup`].
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Profile fields an account can edit about itself.
pub struct UpdateProfileRequest {
    pub name: String,
    pub avatar_url: Option<String>,
}
