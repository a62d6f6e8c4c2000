//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `AuthState` behind an `RwSignal` and provides it as
//! context. The route guard, the sidebar and every API call read it; login,
//! logout and 401 responses write it.
//!
//! The session survives reloads through a [`SessionStore`]. The lifecycle is
//! explicit: the state starts `Unknown` and only [`AuthState::init`] resolves
//! it, so nothing renders protected content before the store has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::types::SessionUser;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the serialized session user.
pub const USER_KEY: &str = "user";

/// A bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: String, user: SessionUser) -> Self {
        Self { token, user }
    }
}

/// Persistent backing for the session.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// `localStorage` backed store using the `token` and `user` keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let token = crate::util::storage::load_string(TOKEN_KEY)?;
        let user = crate::util::storage::load_json::<SessionUser>(USER_KEY)?;
        (!token.is_empty()).then(|| Session::new(token, user))
    }

    fn save(&self, session: &Session) {
        crate::util::storage::save_string(TOKEN_KEY, &session.token);
        crate::util::storage::save_json(USER_KEY, &session.user);
    }

    fn clear(&self) {
        crate::util::storage::remove(TOKEN_KEY);
        crate::util::storage::remove(USER_KEY);
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    pub session: std::cell::RefCell<Option<Session>>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.borrow_mut() = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// The store has not been read yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// What a protected route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Redirect,
    Render,
}

/// Current session and its resolution status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub session: Option<Session>,
}

impl AuthState {
    /// Resolve the initial status from the store.
    pub fn init(&mut self, store: &dyn SessionStore) {
        self.session = store.load();
        self.status = if self.session.is_some() { AuthStatus::Authenticated } else { AuthStatus::Unauthenticated };
    }

    pub fn login(&mut self, session: Session, store: &dyn SessionStore) {
        store.save(&session);
        self.session = Some(session);
        self.status = AuthStatus::Authenticated;
    }

    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.session = None;
        self.status = AuthStatus::Unauthenticated;
    }

    /// The server rejected the token. Same as logout; kept separate so call
    /// sites say why the session ended.
    pub fn expire(&mut self, store: &dyn SessionStore) {
        self.logout(store);
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn guard(&self) -> GuardDecision {
        match self.status {
            AuthStatus::Unknown => GuardDecision::Wait,
            AuthStatus::Unauthenticated => GuardDecision::Redirect,
            AuthStatus::Authenticated => GuardDecision::Render,
        }
    }

    /// API client carrying this session's token.
    pub fn client(&self, base_url: &str) -> ApiClient {
        let client = ApiClient::new(base_url);
        match self.token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}
