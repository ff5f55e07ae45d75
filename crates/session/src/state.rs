//! In-memory session state

use crate::token::{DecodedUser, TokenPair};

/// Current session as seen by the UI
///
/// Once `loading` is false, `tokens` and `user` are either both present or
/// both absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub tokens: Option<TokenPair>,
    pub user: Option<DecodedUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            tokens: None,
            user: None,
            loading: true, // until the token store has been consulted
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Tokens and user agree on whether a session exists
    pub fn is_consistent(&self) -> bool {
        self.tokens.is_none() == self.user.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.tokens = None;
        self.user = None;
    }
}
