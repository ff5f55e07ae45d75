//! Request and response bodies of the auth API

use serde::{Deserialize, Serialize};

/// `POST /api/token/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/register/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Password confirmation, checked by the server
    pub password2: String,
}

/// `POST /api/token/refresh/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response; `refresh` is only present when the server rotates tokens
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}
