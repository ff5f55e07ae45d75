//! Frontend configuration

use linkup_session::SessionConfig;

/// Build-time frontend configuration
pub struct FrontendConfig;

impl FrontendConfig {
    /// API base URL baked in at build time, e.g. by trunk
    pub const API_BASE_URL: Option<&'static str> = option_env!("LINKUP_API_BASE_URL");

    /// Session configuration for the browser
    pub fn session() -> SessionConfig {
        Self::session_with(Self::API_BASE_URL)
    }

    fn session_with(api_base_url: Option<&str>) -> SessionConfig {
        let config = SessionConfig::default();
        match api_base_url.map(str::trim) {
            Some(url) if !url.is_empty() => config.with_api_base_url(url),
            _ => config,
        }
    }
}
