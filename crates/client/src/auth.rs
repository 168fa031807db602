//! Auth endpoints
//!
//! Login and registration are the one place where the CRUD pattern
//! degenerates: the payload is a credential draft and the response is a
//! session token plus a user profile instead of an echoed entity. Token
//! persistence is the caller's concern; this module only performs the
//! round trip.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use salon_core::{ClientResult, Record};

/// Login endpoint path.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Registration endpoint path.
pub const REGISTER_PATH: &str = "/api/auth/register";

// ============================================================================
// Session types
// ============================================================================

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned user id.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// JWT bearer token for subsequent requests.
    pub token: String,
    /// The signed-in user.
    pub user: UserProfile,
}

impl ApiClient {
    /// Sign in with a credential draft (`email`, `password`).
    ///
    /// POST /api/auth/login
    pub async fn login(&self, credentials: &Record) -> ClientResult<Session> {
        self.post(LOGIN_PATH, credentials, "login").await
    }

    /// Create an account from a registration draft.
    ///
    /// POST /api/auth/register
    pub async fn register(&self, registration: &Record) -> ClientResult<Session> {
        self.post(REGISTER_PATH, registration, "register").await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deserialises_backend_shape() {
        let body = r#"{
            "token": "jwt-abc",
            "user": { "id": "u1", "email": "owner@salon.com", "name": "Owner" }
        }"#;
        let session: Session = serde_json::from_str(body).unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.user.email, "owner@salon.com");
    }

    #[test]
    fn test_profile_name_defaults_empty() {
        let body = r#"{ "id": "u2", "email": "a@b.com" }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert!(profile.name.is_empty());
    }
}
