//! Gate around routed pages: placeholder, redirect, or the page itself.
//!
//! The decision is memoized so unrelated session notifications do not
//! remount the page underneath.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::Session;
use crate::util::auth::{Route, RouteDecision, decide};

#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let route = Route::parse(&location.pathname.get());
        decide(&session.get(), route)
    });

    move || {
        let decision = decision.get();
        if let Some(path) = decision.redirect_path() {
            return view! { <Redirect path=path/> }.into_any();
        }
        match decision {
            RouteDecision::Loading => view! {
                <div class="route-loading">
                    <div class="spinner"></div>
                    <p>"Загрузка..."</p>
                </div>
            }
            .into_any(),
            _ => children().into_any(),
        }
    }
}
