//! Route gating by session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view goes through `decide`, either via the `RouteGate`
//! component (reactive signal) or a `RouteGuard` observer attached directly to
//! the session store. The guard never performs network calls of its own.
//!
//! ORDERING
//! ========
//! A pending session always yields `Loading`, before the authentication check
//! is consulted. Otherwise the default "anonymous" flags of a returning user
//! would bounce them to `/login` before `/api/auth/me/` resolves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock};

use crate::state::session::{Session, SessionStore, SubscriptionId};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const FEED_PATH: &str = "/feed";

/// Client-side routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Feed,
    Post(i64),
    Profile(i64),
    NotFound,
}

impl Route {
    /// Parse a location path. Trailing slashes and query strings are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["feed"] => Self::Feed,
            ["post", id] => id.parse().map_or(Self::NotFound, Self::Post),
            ["profile", id] => id.parse().map_or(Self::NotFound, Self::Profile),
            _ => Self::NotFound,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Root => "/".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => REGISTER_PATH.to_owned(),
            Self::Feed => FEED_PATH.to_owned(),
            Self::Post(id) => format!("/post/{id}"),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Routes that require a logged-in user.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Feed | Self::Post(_) | Self::Profile(_))
    }
}

/// What the router should do for a route given the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    RedirectToLogin,
    RedirectToFeed,
    Loading,
}

impl RouteDecision {
    /// Target path for redirect decisions.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToFeed => Some(FEED_PATH),
            Self::Render(_) | Self::Loading => None,
        }
    }
}

pub fn decide(session: &Session, route: Route) -> RouteDecision {
    if session.is_loading() {
        return RouteDecision::Loading;
    }
    match (route, session.is_authenticated()) {
        (Route::Root, true) => RouteDecision::RedirectToFeed,
        (Route::Root, false) => RouteDecision::RedirectToLogin,
        (route, false) if route.is_protected() => RouteDecision::RedirectToLogin,
        (route, _) => RouteDecision::Render(route),
    }
}

struct GuardState {
    route: Route,
    decision: RouteDecision,
}

/// Observer that keeps a route decision in sync with a session store.
///
/// Recomputes synchronously on every session notification and on every
/// `navigate`. Detaches from the store on drop.
pub struct RouteGuard<A> {
    store: SessionStore<A>,
    subscription: SubscriptionId,
    state: Arc<RwLock<GuardState>>,
}

impl<A> RouteGuard<A> {
    pub fn attach(store: &SessionStore<A>, route: Route) -> Self {
        let state = Arc::new(RwLock::new(GuardState {
            route,
            decision: decide(&store.snapshot(), route),
        }));
        let observer = Arc::clone(&state);
        let subscription = store.subscribe(move |session| {
            let mut state = observer.write().unwrap_or_else(PoisonError::into_inner);
            state.decision = decide(session, state.route);
        });
        Self { store: store.clone(), subscription, state }
    }

    pub fn decision(&self) -> RouteDecision {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .decision
    }

    pub fn route(&self) -> Route {
        self.state.read().unwrap_or_else(PoisonError::into_inner).route
    }

    /// Switch to `route` and return the fresh decision.
    pub fn navigate(&self, route: Route) -> RouteDecision {
        let decision = decide(&self.store.snapshot(), route);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.route = route;
        state.decision = decision;
        decision
    }
}

impl<A> Drop for RouteGuard<A> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
