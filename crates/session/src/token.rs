//! Token pair and access token claims
//!
//! Access tokens are decoded without signature verification. The API that
//! issued them is the only party that validates signatures; the client only
//! reads the identity claims to render the UI.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Access and refresh token issued by the auth API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Decode the identity carried by the access token
    pub fn decode_user(&self) -> Result<DecodedUser, TokenError> {
        decode_access_token(&self.access)
    }
}

/// User identifier claim, numeric for the default backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Claims read from the access token payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedUser {
    pub user_id: UserId,
    /// Expiry, Unix seconds
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

impl DecodedUser {
    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is expired at `now` (Unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Best label for greeting the user
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.username.as_deref())
            .map_or_else(|| format!("user {}", self.user_id), ToString::to_string)
    }
}

/// Access token decoding errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    Malformed(&'static str),

    #[error("Invalid token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Invalid token claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the payload segment of a JWT into [`DecodedUser`]
pub fn decode_access_token(token: &str) -> Result<DecodedUser, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed("expected three dot-separated segments"));
    };

    if payload.is_empty() {
        return Err(TokenError::Malformed("empty payload segment"));
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build an unsigned token around `claims`
#[cfg(test)]
pub(crate) fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
