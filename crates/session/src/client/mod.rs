//! Auth API client

pub mod error;
pub mod types;

use crate::config::{AuthConfig, SessionConfig};
use crate::token::TokenPair;
use error::ClientError;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use std::time::Duration;
use types::{LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest};

/// Client for the token and registration endpoints
#[derive(Clone, Debug)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> AuthClientBuilder {
        AuthClientBuilder::default()
    }

    /// Build a client from session configuration
    pub fn from_config(config: &SessionConfig) -> Result<Self, ClientError> {
        let mut builder = Self::builder().base_url(config.api_base_url.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a token pair; only `200 OK` succeeds
    pub async fn obtain_token(&self, request: &LoginRequest) -> Result<TokenPair, ClientError> {
        let response = self
            .client
            .post(self.url(AuthConfig::TOKEN_PATH))
            .json(request)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// Create an account; only `201 Created` succeeds
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url(AuthConfig::REGISTER_PATH))
            .json(request)
            .send()
            .await?;
        expect_status(response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Obtain a new access token from a refresh token
    pub async fn refresh_token(&self, refresh: &str) -> Result<RefreshResponse, ClientError> {
        let request = RefreshRequest {
            refresh: refresh.to_string(),
        };
        let response = self
            .client
            .post(self.url(AuthConfig::TOKEN_REFRESH_PATH))
            .json(&request)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ClientError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_else(|_| status.to_string());
    Err(ClientError::from_status(status, message))
}

/// Builder for AuthClient
#[derive(Default)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub struct AuthClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl AuthClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AuthClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        // Endpoint paths carry the leading slash
        let base_url = base_url.trim_end_matches('/').to_string();

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder
                .user_agent(concat!("linkup-session/", env!("CARGO_PKG_VERSION")));
        }

        let client = client_builder.build()?;

        Ok(AuthClient { client, base_url })
    }
}
