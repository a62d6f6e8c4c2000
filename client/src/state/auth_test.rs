use super::*;

fn session() -> Session {
    Session::new(
        "tok-123".to_owned(),
        SessionUser {
            id: 7,
            email: "admin@academy.test".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Admin".to_owned(),
            role: "admin".to_owned(),
        },
    )
}

#[test]
fn starts_unknown_and_waits() {
    let state = AuthState::default();
    assert_eq!(state.status, AuthStatus::Unknown);
    assert_eq!(state.guard(), GuardDecision::Wait);
}

#[test]
fn init_without_stored_session_redirects() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::default();
    state.init(&store);
    assert_eq!(state.status, AuthStatus::Unauthenticated);
    assert_eq!(state.guard(), GuardDecision::Redirect);
}

#[test]
fn init_restores_persisted_session() {
    let store = MemorySessionStore::default();
    store.save(&session());
    let mut state = AuthState::default();
    state.init(&store);
    assert_eq!(state.guard(), GuardDecision::Render);
    assert_eq!(state.token(), Some("tok-123"));
    assert_eq!(state.user().map(|u| u.first_name.as_str()), Some("Ada"));
}

#[test]
fn login_persists_and_logout_clears() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::default();
    state.init(&store);

    state.login(session(), &store);
    assert_eq!(state.status, AuthStatus::Authenticated);
    assert_eq!(store.load(), Some(session()));

    state.logout(&store);
    assert_eq!(state.status, AuthStatus::Unauthenticated);
    assert!(state.session.is_none());
    assert!(store.load().is_none());
}

#[test]
fn expire_ends_session() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::default();
    state.login(session(), &store);
    state.expire(&store);
    assert_eq!(state.guard(), GuardDecision::Redirect);
    assert!(store.load().is_none());
}

#[test]
fn client_carries_session_token() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::default();
    assert_eq!(state.client("/api/").token(), None);
    state.login(session(), &store);
    let client = state.client("/api/");
    assert_eq!(client.token(), Some("tok-123"));
    assert_eq!(client.base_url(), "/api");
}
