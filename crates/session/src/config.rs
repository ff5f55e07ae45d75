//! Session configuration

use serde::{Deserialize, Serialize};

/// Authentication constants
pub struct AuthConfig;

impl AuthConfig {
    /// Token obtain endpoint
    pub const TOKEN_PATH: &'static str = "/api/token/";

    /// Token refresh endpoint
    pub const TOKEN_REFRESH_PATH: &'static str = "/api/token/refresh/";

    /// Registration endpoint
    pub const REGISTER_PATH: &'static str = "/api/register/";

    /// Local storage key for the token pair
    pub const TOKEN_STORAGE_KEY: &'static str = "authTokens";

    /// Default API base URL
    pub const DEFAULT_API_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// How long a toast notification stays on screen
    pub const NOTIFICATION_TIMEOUT_MS: u32 = 1_500;

    /// Access token validation interval in milliseconds
    pub const TOKEN_VALIDATION_INTERVAL_MS: u32 = 60_000; // 1 minute
}

/// Runtime configuration for a session manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Base URL of the authentication API, without trailing slash
    pub api_base_url: String,
    /// Storage key holding the serialized token pair
    pub storage_key: String,
    /// Drop stored sessions whose access token has already expired
    pub discard_expired_tokens: bool,
    /// Request timeout in seconds (ignored on wasm32)
    pub request_timeout_secs: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: AuthConfig::DEFAULT_API_BASE_URL.to_string(),
            storage_key: AuthConfig::TOKEN_STORAGE_KEY.to_string(),
            discard_expired_tokens: false,
            request_timeout_secs: Some(30),
        }
    }
}

impl SessionConfig {
    /// Configuration pointing at a different API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
