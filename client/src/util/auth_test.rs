use super::*;
use crate::net::types::SessionUser;
use crate::state::auth::{AuthStatus, Session};

fn signed_in() -> AuthState {
    AuthState {
        status: AuthStatus::Authenticated,
        session: Some(Session::new(
            "t".to_owned(),
            SessionUser {
                id: 1,
                email: "a@academy.test".to_owned(),
                first_name: "Ada".to_owned(),
                last_name: "Admin".to_owned(),
                role: "admin".to_owned(),
            },
        )),
    }
}

#[test]
fn should_redirect_unauth_when_resolved_without_session() {
    let state = AuthState { status: AuthStatus::Unauthenticated, session: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_unknown() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

/// Run `f` under a reactive owner so signals have an arena to live in.
fn with_owner<R>(f: impl FnOnce() -> R) -> R {
    Owner::new().with(f)
}

#[test]
fn non_auth_errors_keep_session() {
    with_owner(|| {
        let auth = RwSignal::new(signed_in());
        assert!(!expire_on_unauthorized(auth, &ApiError::Status { status: 500 }));
        assert_eq!(auth.get_untracked().status, AuthStatus::Authenticated);
    });
}

#[test]
fn unauthorized_expires_session() {
    with_owner(|| {
        let auth = RwSignal::new(signed_in());
        assert!(expire_on_unauthorized(auth, &ApiError::Unauthorized));
        assert!(should_redirect_unauth(&auth.get_untracked()));
    });
}

#[test]
fn api_client_uses_configured_base_and_session_token() {
    with_owner(|| {
        let auth = RwSignal::new(signed_in());
        let config = ClientConfig { api_base_url: "https://api.academy.test".to_owned() };
        let client = api_client(auth, &config);
        assert_eq!(client.base_url(), "https://api.academy.test");
        assert_eq!(client.token(), Some("t"));
    });
}
