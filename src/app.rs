//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::config::ClientConfig;
use crate::net::api::BlogApi;
use crate::pages::{
    feed::FeedPage, login::LoginPage, not_found::NotFoundPage, post::PostPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::session::BlogSessionStore;

/// Root application component.
///
/// Builds the API client and session store once, bridges store notifications
/// into a `RwSignal<Session>`, and starts the startup identity check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = BlogApi::new(&config);
    let store = BlogSessionStore::new(api.clone());
    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |next| session.set(next.clone()));

    provide_context(config);
    provide_context(api);
    provide_context(store.clone());
    provide_context(session);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move { store.check_session().await });
    #[cfg(not(feature = "csr"))]
    let _ = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-client.css"/>
        <Title text="Блог"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <RouteGate>""</RouteGate> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("feed") view=|| view! { <RouteGate><FeedPage/></RouteGate> }/>
                <Route
                    path=(StaticSegment("post"), ParamSegment("id"))
                    view=|| view! { <RouteGate><PostPage/></RouteGate> }
                />
                <Route
                    path=(StaticSegment("profile"), ParamSegment("id"))
                    view=|| view! { <RouteGate><ProfilePage/></RouteGate> }
                />
            </Routes>
        </Router>
    }
}
