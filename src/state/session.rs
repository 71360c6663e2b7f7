//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is built once at the app root and shared through Leptos context.
//! It is the only writer of `Session`; route gating and user-aware components
//! observe it through `subscribe`, and the app root bridges those
//! notifications into a reactive signal.
//!
//! FAILURE SEMANTICS
//! =================
//! `login`, `register` and `logout` hand backend errors to the caller
//! untouched and leave the session as it was. `check_session` never fails: a
//! rejected identity check simply means "anonymous".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::net::api::BlogApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, User};

/// Who is logged in, and whether that is still being determined.
///
/// `is_authenticated` is derived from the presence of `user`, so an
/// authenticated session without a user cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    user: Option<User>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    /// Startup state: identity check not yet resolved.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the logged-in user owns a resource authored by `author_id`.
    pub fn is_owner(&self, author_id: i64) -> bool {
        self.user_id() == Some(author_id)
    }
}

/// Backend operations the session store depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn me(&self) -> Result<User, ApiError>;
    async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError>;
    async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for BlogApi {
    async fn me(&self) -> Result<User, ApiError> {
        BlogApi::me(self).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        BlogApi::login(self, credentials).await
    }

    async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        BlogApi::register(self, data).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        BlogApi::logout(self).await
    }
}

/// Handle returned by `subscribe`, used to detach the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct Shared {
    session: RwLock<Session>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

/// Shared session store. Clones share state and listeners.
pub struct SessionStore<A> {
    api: Arc<A>,
    shared: Arc<Shared>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self { api: Arc::clone(&self.api), shared: Arc::clone(&self.shared) }
    }
}

impl<A> SessionStore<A> {
    /// New store in the pending state.
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            shared: Arc::new(Shared {
                session: RwLock::new(Session::pending()),
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.shared
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register `listener`; it runs synchronously after every session change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        self.shared
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Detach a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .shared
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn replace(&self, next: Session) {
        *self
            .shared
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
        self.notify();
    }

    fn notify(&self) {
        let session = self.snapshot();
        // Copy out so listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&session);
        }
    }
}

impl<A: AuthApi> SessionStore<A> {
    /// Resolve the startup identity check against `/api/auth/me/`.
    pub async fn check_session(&self) {
        let mut pending = self.snapshot();
        pending.loading = true;
        self.replace(pending);

        match self.api.me().await {
            Ok(user) => {
                leptos::logging::log!("session restored for {}", user.username);
                self.replace(Session::authenticated(user));
            }
            Err(e) => {
                leptos::logging::log!("no active session: {e}");
                self.replace(Session::anonymous());
            }
        }
    }

    /// Log in and adopt the returned identity.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let user = self.api.login(credentials).await?;
        leptos::logging::log!("logged in as {}", user.username);
        self.replace(Session::authenticated(user.clone()));
        Ok(user)
    }

    /// Register and adopt the returned identity.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        let user = self.api.register(data).await?;
        leptos::logging::log!("registered and logged in as {}", user.username);
        self.replace(Session::authenticated(user.clone()));
        Ok(user)
    }

    /// Close the backend session. On failure the session stays authenticated.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.api.logout().await?;
        leptos::logging::log!("logged out");
        self.replace(Session::anonymous());
        Ok(())
    }
}

/// The store as wired in the app, backed by the HTTP client.
pub type BlogSessionStore = SessionStore<BlogApi>;
