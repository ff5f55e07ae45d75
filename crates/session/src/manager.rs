//! Session manager
//!
//! Owns the in-memory [`SessionState`], keeps it in sync with the
//! [`TokenStore`] and runs the login, registration and logout flows against
//! the auth API. Every operation handles its own failures: the caller gets a
//! [`Navigation`] back and the user gets a [`Notification`].
//!
//! The manager is meant to be shared as `Rc<SessionManager<_>>` on a single
//! thread. State borrows are never held across an `.await`, so overlapping
//! operations are allowed; whichever response resolves last wins.

use crate::client::AuthClient;
use crate::client::error::ClientError;
use crate::client::types::{LoginRequest, RegisterRequest};
use crate::config::SessionConfig;
use crate::navigation::Navigation;
use crate::notify::{Notification, Notifier};
use crate::state::SessionState;
use crate::store::{Storage, TokenStore};
use crate::token::{DecodedUser, TokenPair};
use chrono::Utc;
use std::cell::RefCell;
use std::rc::Rc;

const LOGIN_SUCCEEDED: &str = "Login successful";
const LOGIN_FAILED: &str = "Username or password does not exist";
const REGISTER_SUCCEEDED: &str = "Registration successful, login now";
const LOGGED_OUT: &str = "Logged out";
const SESSION_EXPIRED: &str = "Session expired, please log in again";

type Listener = Rc<dyn Fn(&SessionState)>;
type Clock = Rc<dyn Fn() -> i64>;

/// Authentication session bound to a storage backend
pub struct SessionManager<S> {
    client: AuthClient,
    store: TokenStore<S>,
    notifier: Rc<dyn Notifier>,
    clock: Clock,
    discard_expired_tokens: bool,
    state: RefCell<SessionState>,
    listener: RefCell<Option<Listener>>,
}

impl<S: Storage> SessionManager<S> {
    /// Create a manager seeded from `store`; call [`Self::initialize`] next
    pub fn new(client: AuthClient, store: TokenStore<S>, notifier: Rc<dyn Notifier>) -> Self {
        let state = SessionState {
            tokens: store.load(),
            ..SessionState::default()
        };

        Self {
            client,
            store,
            notifier,
            clock: Rc::new(|| Utc::now().timestamp()),
            discard_expired_tokens: false,
            state: RefCell::new(state),
            listener: RefCell::new(None),
        }
    }

    /// Build client and token store from configuration
    pub fn from_config(
        config: &SessionConfig,
        storage: S,
        notifier: Rc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let client = AuthClient::from_config(config)?;
        let store = TokenStore::new(storage, config.storage_key.clone());
        Ok(Self::new(client, store, notifier)
            .discard_expired_tokens(config.discard_expired_tokens))
    }

    /// Replace the clock (Unix seconds) used for expiry checks
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Whether an expired stored session is dropped on startup
    pub fn discard_expired_tokens(mut self, discard: bool) -> Self {
        self.discard_expired_tokens = discard;
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn user(&self) -> Option<DecodedUser> {
        self.state.borrow().user.clone()
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.state.borrow().tokens.clone()
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Register the listener called after every state change
    ///
    /// Replaces any previous listener.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
    }

    /// First synchronization pass against the token store
    ///
    /// Clears `loading` after the first call; later calls only resynchronize.
    pub fn initialize(&self) {
        self.synchronize_with(self.discard_expired_tokens);

        if self.state.borrow().tokens.is_none() {
            // drops unparseable leftovers so storage mirrors the session
            self.store.clear();
        }

        {
            let mut state = self.state.borrow_mut();
            if state.loading {
                state.loading = false;
                tracing::debug!(authenticated = state.user.is_some(), "Session initialized");
            }
        }
        self.emit();
    }

    /// Recompute the decoded user from the current tokens
    pub fn synchronize(&self) {
        self.synchronize_with(false);
        self.emit();
    }

    fn synchronize_with(&self, discard_expired: bool) {
        let Some(tokens) = self.tokens() else {
            self.state.borrow_mut().user = None;
            return;
        };

        match tokens.decode_user() {
            Ok(user) if discard_expired && user.is_expired_at(self.now()) => {
                tracing::warn!(user_id = %user.user_id, exp = user.exp, "Discarding expired stored session");
                self.discard_session();
            }
            Ok(user) => {
                self.state.borrow_mut().user = Some(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding session with undecodable access token");
                self.discard_session();
            }
        }
    }

    /// Exchange credentials for a session
    ///
    /// Returns [`Navigation::Home`] on success. On failure the state and the
    /// store are left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Navigation {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let tokens = match self.client.obtain_token(&request).await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "Login failed");
                self.notifier.notify(Notification::error(LOGIN_FAILED));
                return Navigation::Stay;
            }
        };

        let user = match tokens.decode_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Login returned an undecodable access token");
                self.notifier.notify(Notification::error(LOGIN_FAILED));
                return Navigation::Stay;
            }
        };

        tracing::info!(user_id = %user.user_id, "Logged in");
        self.establish(tokens, user);
        self.notifier.notify(Notification::success(LOGIN_SUCCEEDED));
        Navigation::Home
    }

    /// Create an account; never establishes a session
    ///
    /// Returns [`Navigation::Login`] on success.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Navigation {
        let request = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            password2: password_confirmation.to_string(),
        };

        match self.client.register(&request).await {
            Ok(()) => {
                tracing::info!(username, "Registered account");
                self.notifier.notify(Notification::success(REGISTER_SUCCEEDED));
                Navigation::Login
            }
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "Registration failed");
                let title = match e.status() {
                    Some(status) => format!("An error occurred: {status}"),
                    None => format!("An error occurred: {e}"),
                };
                self.notifier.notify(Notification::error(title));
                Navigation::Stay
            }
        }
    }

    /// End the session; calling it again changes nothing further
    pub fn logout(&self) -> Navigation {
        self.state.borrow_mut().clear();
        self.store.clear();
        tracing::info!("Logged out");
        self.emit();
        self.notifier.notify(Notification::info(LOGGED_OUT));
        Navigation::Login
    }

    /// Refresh an expired access token, ending the session if that fails
    ///
    /// A live session or no session at all is left alone. If the session
    /// changed while the refresh request was in flight, the response is
    /// dropped.
    pub async fn validate(&self) -> Navigation {
        let refresh = {
            let state = self.state.borrow();
            match (&state.tokens, &state.user) {
                (Some(tokens), Some(user)) if user.is_expired_at(self.now()) => {
                    tokens.refresh.clone()
                }
                _ => return Navigation::Stay,
            }
        };

        tracing::debug!("Access token expired, refreshing");
        let result = self.client.refresh_token(&refresh).await;

        if self.tokens().map(|t| t.refresh) != Some(refresh.clone()) {
            tracing::debug!("Session changed during refresh, ignoring response");
            return Navigation::Stay;
        }

        let tokens = match result {
            Ok(response) => TokenPair {
                access: response.access,
                refresh: response.refresh.unwrap_or(refresh),
            },
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "Token refresh failed");
                return self.expire();
            }
        };

        match tokens.decode_user() {
            Ok(user) => {
                tracing::debug!(user_id = %user.user_id, "Access token refreshed");
                self.establish(tokens, user);
                Navigation::Stay
            }
            Err(e) => {
                tracing::warn!(error = %e, "Refresh returned an undecodable access token");
                self.expire()
            }
        }
    }

    fn establish(&self, tokens: TokenPair, user: DecodedUser) {
        self.store.save(&tokens);
        {
            let mut state = self.state.borrow_mut();
            state.tokens = Some(tokens);
            state.user = Some(user);
        }
        self.emit();
    }

    fn expire(&self) -> Navigation {
        self.discard_session();
        self.emit();
        self.notifier.notify(Notification::info(SESSION_EXPIRED));
        Navigation::Login
    }

    fn discard_session(&self) {
        self.state.borrow_mut().clear();
        self.store.clear();
    }

    fn now(&self) -> i64 {
        (self.clock)()
    }

    fn emit(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.state();
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{GuardDecision, evaluate};
    use crate::notify::{MockNotifier, NotificationKind};
    use crate::store::MemoryStorage;
    use crate::token::encode_unsigned;
    use serde_json::json;
    use std::cell::Cell;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "authTokens";
    const NOW: i64 = 1_700_000_000;

    fn access_token(user_id: i64, exp: i64) -> String {
        encode_unsigned(&json!({
            "token_type": "access",
            "user_id": user_id,
            "exp": exp,
            "username": "ada",
            "email": "a@b.com"
        }))
    }

    fn quiet() -> Rc<dyn Notifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        Rc::new(notifier)
    }

    fn expecting(kind: NotificationKind, title: &'static str) -> Rc<dyn Notifier> {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(move |n| n.kind == kind && n.title == title)
            .times(1)
            .return_const(());
        Rc::new(notifier)
    }

    fn manager(
        base_url: &str,
        storage: &MemoryStorage,
        notifier: Rc<dyn Notifier>,
    ) -> SessionManager<MemoryStorage> {
        let client = AuthClient::new(base_url).unwrap();
        let store = TokenStore::new(storage.clone(), KEY);
        SessionManager::new(client, store, notifier).with_clock(|| NOW)
    }

    fn seed(storage: &MemoryStorage, tokens: &TokenPair) {
        storage
            .set(KEY, &serde_json::to_string(tokens).unwrap())
            .unwrap();
    }

    #[test]
    fn empty_store_initializes_to_logged_out() {
        let storage = MemoryStorage::new();
        let session = manager("http://127.0.0.1:9", &storage, quiet());
        assert!(session.is_loading());

        session.initialize();

        let state = session.state();
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert!(state.is_consistent());
        assert_eq!(evaluate(&state), GuardDecision::Redirect(Navigation::Login));
    }

    #[test]
    fn stored_tokens_restore_session() {
        let storage = MemoryStorage::new();
        let tokens = TokenPair::new(access_token(3, NOW + 300), "refresh");
        seed(&storage, &tokens);

        let session = manager("http://127.0.0.1:9", &storage, quiet());
        session.initialize();

        let state = session.state();
        assert_eq!(state.tokens, Some(tokens));
        assert_eq!(state.user.unwrap().user_id, crate::token::UserId::Numeric(3));
        assert!(!state.loading);
    }

    #[test]
    fn invalid_json_in_store_is_no_session() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{{definitely not json").unwrap();

        let session = manager("http://127.0.0.1:9", &storage, quiet());
        session.initialize();

        let state = session.state();
        assert!(state.user.is_none());
        assert!(state.tokens.is_none());
        assert!(!state.loading);
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn undecodable_stored_token_is_purged() {
        let storage = MemoryStorage::new();
        seed(&storage, &TokenPair::new("not-a-jwt", "refresh"));

        let session = manager("http://127.0.0.1:9", &storage, quiet());
        session.initialize();

        assert!(session.state().is_consistent());
        assert!(session.user().is_none());
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn expired_stored_token_follows_policy() {
        let tokens = TokenPair::new(access_token(3, NOW - 1), "refresh");

        let storage = MemoryStorage::new();
        seed(&storage, &tokens);
        let session = manager("http://127.0.0.1:9", &storage, quiet());
        session.initialize();
        assert_eq!(session.tokens(), Some(tokens.clone()));
        assert!(session.user().is_some());
        assert!(storage.contains(KEY));

        let storage = MemoryStorage::new();
        seed(&storage, &tokens);
        let session =
            manager("http://127.0.0.1:9", &storage, quiet()).discard_expired_tokens(true);
        session.initialize();
        assert!(session.user().is_none());
        assert!(!storage.contains(KEY));
    }

    #[tokio::test]
    async fn reload_with_expired_access_token_refreshes_session() {
        let server = MockServer::start().await;
        let fresh = access_token(3, NOW + 300);
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .and(body_json(json!({"refresh": "good-refresh"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": fresh})))
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        seed(&storage, &TokenPair::new(access_token(3, NOW - 400), "good-refresh"));
        let config = SessionConfig::default().with_api_base_url(server.uri());
        let session = SessionManager::from_config(&config, storage.clone(), quiet())
            .unwrap()
            .with_clock(|| NOW);

        session.initialize();
        assert!(session.user().is_some());

        assert_eq!(session.validate().await, Navigation::Stay);

        let expected = TokenPair::new(fresh, "good-refresh");
        assert_eq!(session.tokens(), Some(expected.clone()));
        assert_eq!(session.user().unwrap().exp, NOW + 300);
        assert_eq!(session.store().load(), Some(expected));
    }

    #[test]
    fn loading_flips_only_once() {
        let storage = MemoryStorage::new();
        let session = manager("http://127.0.0.1:9", &storage, quiet());
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        session.subscribe(move |state| {
            assert!(!state.loading);
            seen.set(seen.get() + 1);
        });

        session.initialize();
        session.initialize();
        session.synchronize();

        assert!(!session.is_loading());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn login_success_establishes_session() {
        let server = MockServer::start().await;
        let tokens = TokenPair::new(access_token(7, NOW + 300), "R");

        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(&tokens))
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Success, LOGIN_SUCCEEDED),
        );
        session.initialize();

        let navigation = session.login("a@b.com", "pw").await;

        assert_eq!(navigation, Navigation::Home);
        let state = session.state();
        assert_eq!(state.tokens.as_ref(), Some(&tokens));
        assert_eq!(state.user, Some(tokens.decode_user().unwrap()));
        assert_eq!(session.store().load(), Some(tokens));
        assert_eq!(evaluate(&state), GuardDecision::Allow);
    }

    #[tokio::test]
    async fn login_rejected_leaves_state_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "No active account found"})),
            )
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Error, LOGIN_FAILED),
        );
        session.initialize();
        let before = session.state();

        let navigation = session.login("a@b.com", "wrong").await;

        assert_eq!(navigation, Navigation::Stay);
        assert_eq!(session.state(), before);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn failed_login_keeps_existing_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "No active account found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let tokens = TokenPair::new(access_token(4, NOW + 300), "live-refresh");
        seed(&storage, &tokens);
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Error, LOGIN_FAILED),
        );
        session.initialize();
        let before = session.state();
        assert_eq!(evaluate(&before), GuardDecision::Allow);

        let navigation = session.login("other@b.com", "wrong").await;

        assert_eq!(navigation, Navigation::Stay);
        assert_eq!(session.state(), before);
        assert_eq!(session.store().load(), Some(tokens));
    }

    #[tokio::test]
    async fn login_with_undecodable_access_token_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"access": "x", "refresh": "y"})),
            )
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Error, LOGIN_FAILED),
        );
        session.initialize();

        assert_eq!(session.login("a@b.com", "pw").await, Navigation::Stay);
        assert!(session.tokens().is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn login_unreachable_server_fails_quietly() {
        let storage = MemoryStorage::new();
        let session = manager(
            "http://127.0.0.1:9",
            &storage,
            expecting(NotificationKind::Error, LOGIN_FAILED),
        );
        session.initialize();

        assert_eq!(session.login("a@b.com", "pw").await, Navigation::Stay);
        assert!(session.state().is_consistent());
    }

    #[tokio::test]
    async fn register_created_navigates_to_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .and(body_json(json!({
                "email": "a@b.com",
                "username": "ada",
                "password": "secret12",
                "password2": "secret12"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"email": "a@b.com", "username": "ada"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Success, REGISTER_SUCCEEDED),
        );
        session.initialize();

        let navigation = session
            .register("a@b.com", "ada", "secret12", "secret12")
            .await;

        assert_eq!(navigation, Navigation::Login);
        assert!(session.tokens().is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn register_failure_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"password": ["Password fields didn't match."]})),
            )
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Error, "An error occurred: 400"),
        );
        session.initialize();

        let navigation = session.register("a@b.com", "ada", "one", "two").await;
        assert_eq!(navigation, Navigation::Stay);
    }

    #[tokio::test]
    async fn register_ok_status_is_not_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Error, "An error occurred: 200"),
        );

        let navigation = session.register("a@b.com", "ada", "pw", "pw").await;
        assert_eq!(navigation, Navigation::Stay);
    }

    #[test]
    fn logout_twice_matches_logout_once() {
        let storage = MemoryStorage::new();
        seed(&storage, &TokenPair::new(access_token(1, NOW + 60), "r"));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Info && n.title == LOGGED_OUT)
            .times(2)
            .return_const(());

        let session = manager("http://127.0.0.1:9", &storage, Rc::new(notifier));
        session.initialize();
        assert!(session.user().is_some());

        assert_eq!(session.logout(), Navigation::Login);
        let once = session.state();
        assert_eq!(session.logout(), Navigation::Login);

        assert_eq!(session.state(), once);
        assert!(once.tokens.is_none() && once.user.is_none());
        assert!(!storage.contains(KEY));
    }

    #[tokio::test]
    async fn validate_refreshes_expired_access_token() {
        let server = MockServer::start().await;
        let fresh = access_token(5, NOW + 300);
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .and(body_json(json!({"refresh": "old-refresh"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": fresh})))
            .expect(1)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        seed(&storage, &TokenPair::new(access_token(5, NOW - 10), "old-refresh"));
        let session = manager(&server.uri(), &storage, quiet());
        session.initialize();

        assert_eq!(session.validate().await, Navigation::Stay);

        let expected = TokenPair::new(fresh, "old-refresh");
        assert_eq!(session.tokens(), Some(expected.clone()));
        assert_eq!(session.user().unwrap().exp, NOW + 300);
        assert_eq!(session.store().load(), Some(expected));
    }

    #[tokio::test]
    async fn validate_ends_session_when_refresh_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Token is invalid or expired"})),
            )
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        seed(&storage, &TokenPair::new(access_token(5, NOW - 10), "stale"));
        let session = manager(
            &server.uri(),
            &storage,
            expecting(NotificationKind::Info, SESSION_EXPIRED),
        );
        session.initialize();

        assert_eq!(session.validate().await, Navigation::Login);
        assert!(session.user().is_none());
        assert!(session.state().is_consistent());
        assert!(!storage.contains(KEY));
    }

    #[tokio::test]
    async fn validate_leaves_live_session_alone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let storage = MemoryStorage::new();
        let tokens = TokenPair::new(access_token(5, NOW + 10), "r");
        seed(&storage, &tokens);
        let session = manager(&server.uri(), &storage, quiet());
        session.initialize();

        assert_eq!(session.validate().await, Navigation::Stay);
        assert_eq!(session.tokens(), Some(tokens));
    }

    #[tokio::test]
    async fn tokens_and_user_agree_after_every_operation() {
        let server = MockServer::start().await;
        let tokens = TokenPair::new(access_token(9, NOW + 300), "R");
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&tokens))
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier.expect_notify().return_const(());

        let storage = MemoryStorage::new();
        let session = manager(&server.uri(), &storage, Rc::new(notifier));
        let consistent = Rc::new(Cell::new(true));
        let flag = consistent.clone();
        session.subscribe(move |state| {
            if !state.loading && !state.is_consistent() {
                flag.set(false);
            }
        });

        session.initialize();
        session.login("a@b.com", "pw").await;
        session.synchronize();
        session.logout();
        session.login("a@b.com", "pw").await;
        session.validate().await;

        assert!(consistent.get());
        assert!(session.state().is_consistent());
        assert!(session.user().is_some());
    }
}
