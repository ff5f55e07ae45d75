//! Linkup session core
//!
//! Token persistence, access token decoding, the HTTP auth client and the
//! session manager shared by the web frontend. Nothing in here touches the
//! DOM, so the whole crate builds and tests on native targets.

pub mod client;
pub mod config;
pub mod guard;
pub mod manager;
pub mod navigation;
pub mod notify;
pub mod state;
pub mod store;
pub mod token;

pub use client::{AuthClient, error::ClientError};
pub use config::{AuthConfig, SessionConfig};
pub use guard::{GuardDecision, evaluate};
pub use manager::SessionManager;
pub use navigation::Navigation;
pub use notify::{Notification, NotificationKind, Notifier};
pub use state::SessionState;
pub use store::{MemoryStorage, Storage, StorageError, TokenStore};
pub use token::{DecodedUser, TokenError, TokenPair, UserId};
