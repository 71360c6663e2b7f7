use std::cell::{Cell, RefCell};
use std::sync::Mutex;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 7,
        username: "anna".to_owned(),
        email: Some("anna@example.com".to_owned()),
        created_at: None,
    }
}

fn unauthorized() -> ApiError {
    ApiError::from_status(401, r#"{"error": "Invalid credentials", "details": {}}"#)
}

/// Scripted backend: each call returns the configured result.
struct FakeAuthApi {
    me: RefCell<Result<User, ApiError>>,
    login: RefCell<Result<User, ApiError>>,
    register: RefCell<Result<User, ApiError>>,
    logout: RefCell<Result<(), ApiError>>,
    calls: Cell<usize>,
}

impl FakeAuthApi {
    fn new() -> Self {
        Self {
            me: RefCell::new(Err(unauthorized())),
            login: RefCell::new(Err(unauthorized())),
            register: RefCell::new(Err(ApiError::Network("offline".to_owned()))),
            logout: RefCell::new(Ok(())),
            calls: Cell::new(0),
        }
    }

    fn with_me(self, result: Result<User, ApiError>) -> Self {
        *self.me.borrow_mut() = result;
        self
    }

    fn with_login(self, result: Result<User, ApiError>) -> Self {
        *self.login.borrow_mut() = result;
        self
    }

    fn with_register(self, result: Result<User, ApiError>) -> Self {
        *self.register.borrow_mut() = result;
        self
    }

    fn with_logout(self, result: Result<(), ApiError>) -> Self {
        *self.logout.borrow_mut() = result;
        self
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn me(&self) -> Result<User, ApiError> {
        self.bump();
        self.me.borrow().clone()
    }

    async fn login(&self, _credentials: &LoginRequest) -> Result<User, ApiError> {
        self.bump();
        self.login.borrow().clone()
    }

    async fn register(&self, _data: &RegisterRequest) -> Result<User, ApiError> {
        self.bump();
        self.register.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.bump();
        self.logout.borrow().clone()
    }
}

fn assert_invariant(session: &Session) {
    assert_eq!(session.is_authenticated(), session.user().is_some());
}

fn credentials() -> LoginRequest {
    LoginRequest { username: "anna".to_owned(), password: "wrong".to_owned() }
}

fn authenticated_store() -> SessionStore<FakeAuthApi> {
    let store = SessionStore::new(FakeAuthApi::new().with_me(Ok(make_user())));
    block_on(store.check_session());
    store
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_pending() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn session_ownership_compares_ids() {
    let session = Session::authenticated(make_user());
    assert!(session.is_owner(7));
    assert!(!session.is_owner(8));
    assert!(!Session::anonymous().is_owner(7));
}

// =============================================================
// check_session
// =============================================================

#[test]
fn check_session_success_authenticates() {
    let store = SessionStore::new(FakeAuthApi::new().with_me(Ok(make_user())));
    assert!(store.snapshot().is_loading());

    block_on(store.check_session());

    let session = store.snapshot();
    assert!(!session.is_loading());
    assert!(session.is_authenticated());
    assert_eq!(session.user_id(), Some(7));
    assert_invariant(&session);
}

#[test]
fn check_session_unauthorized_is_anonymous() {
    let store = SessionStore::new(FakeAuthApi::new());
    block_on(store.check_session());

    let session = store.snapshot();
    assert_eq!(session, Session::anonymous());
    assert_invariant(&session);
}

#[test]
fn check_session_network_failure_is_anonymous() {
    let api = FakeAuthApi::new().with_me(Err(ApiError::Network("offline".to_owned())));
    let store = SessionStore::new(api);
    block_on(store.check_session());
    assert_eq!(store.snapshot(), Session::anonymous());
}

#[test]
fn check_session_notifies_pending_then_resolved() {
    let store = SessionStore::new(FakeAuthApi::new().with_me(Ok(make_user())));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().unwrap().push(s.clone()));

    block_on(store.check_session());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_loading());
    assert!(!seen[1].is_loading());
    assert!(seen[1].is_authenticated());
    seen.iter().for_each(assert_invariant);
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_success_sets_user_and_returns_it() {
    let store = SessionStore::new(FakeAuthApi::new().with_login(Ok(make_user())));
    block_on(store.check_session());

    let user = block_on(store.login(&credentials())).unwrap();
    assert_eq!(user.username, "anna");
    let session = store.snapshot();
    assert!(session.is_authenticated());
    assert_invariant(&session);
}

#[test]
fn login_failure_propagates_error_without_mutation() {
    let store = SessionStore::new(FakeAuthApi::new());
    block_on(store.check_session());
    let before = store.snapshot();

    let err = block_on(store.login(&credentials())).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn login_failure_does_not_notify() {
    let store = SessionStore::new(FakeAuthApi::new());
    block_on(store.check_session());
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    store.subscribe(move |_| *sink.lock().unwrap() += 1);

    let _ = block_on(store.login(&credentials()));
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn register_success_authenticates() {
    let store = SessionStore::new(FakeAuthApi::new().with_register(Ok(make_user())));
    block_on(store.check_session());

    let user = block_on(store.register(&RegisterRequest::default())).unwrap();
    assert_eq!(user.id, 7);
    assert!(store.snapshot().is_authenticated());
}

#[test]
fn register_validation_error_is_returned_unchanged() {
    let body = r#"{"error": "Validation error", "details": {"password_confirm": ["Passwords do not match"]}}"#;
    let store = SessionStore::new(FakeAuthApi::new().with_register(Err(ApiError::from_status(400, body))));
    block_on(store.check_session());

    let err = block_on(store.register(&RegisterRequest::default())).unwrap_err();
    assert_eq!(err, ApiError::from_status(400, body));
    assert!(!store.snapshot().is_authenticated());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_success_resets_to_anonymous() {
    let store = authenticated_store();
    block_on(store.logout()).unwrap();
    let session = store.snapshot();
    assert_eq!(session, Session::anonymous());
    assert_invariant(&session);
}

#[test]
fn logout_failure_keeps_session_authenticated() {
    let store = SessionStore::new(
        FakeAuthApi::new()
            .with_me(Ok(make_user()))
            .with_logout(Err(ApiError::Network("offline".to_owned()))),
    );
    block_on(store.check_session());

    assert!(block_on(store.logout()).is_err());
    assert!(store.snapshot().is_authenticated());
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn unsubscribe_stops_notifications() {
    let store = SessionStore::new(FakeAuthApi::new());
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    block_on(store.check_session());
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn clones_share_state_and_api() {
    let store = SessionStore::new(FakeAuthApi::new().with_me(Ok(make_user())));
    let other = store.clone();
    block_on(other.check_session());
    assert!(store.snapshot().is_authenticated());
    assert_eq!(store.api.calls.get(), 1);
}

#[test]
fn every_call_is_a_single_round_trip() {
    let store = authenticated_store();
    let _ = block_on(store.login(&credentials()));
    let _ = block_on(store.logout());
    assert_eq!(store.api.calls.get(), 3);
}
