//! Page chrome: header, auth-aware navigation, and the mobile burger menu.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{BlogSessionStore, Session};
use crate::util::auth::{FEED_PATH, LOGIN_PATH, REGISTER_PATH, Route};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<BlogSessionStore>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let close_menu = move |_| menu_open.set(false);
    let profile_href = move || {
        session
            .get()
            .user_id()
            .map_or_else(|| LOGIN_PATH.to_owned(), |id| Route::Profile(id).path())
    };

    let on_logout = move |_| {
        menu_open.set(false);
        let store = store.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match store.logout().await {
                Ok(()) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(e) => leptos::logging::warn!("logout failed: {e}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (store, navigate);
    };

    view! {
        <div class="layout">
            <header class="layout-header">
                <div class="layout-header-container">
                    <A href="/" attr:class="layout-logo">
                        <span class="layout-logo-text">"Блог"</span>
                    </A>

                    <button
                        class="layout-burger"
                        class:active=move || menu_open.get()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <nav class="layout-nav" class:mobile-open=move || menu_open.get()>
                        <Show
                            when=move || session.get().is_authenticated()
                            fallback=move || {
                                view! {
                                    <A href=LOGIN_PATH attr:class="layout-nav-link" on:click=close_menu>
                                        "Войти"
                                    </A>
                                    <A href=REGISTER_PATH attr:class="layout-nav-link" on:click=close_menu>
                                        "Регистрация"
                                    </A>
                                }
                            }
                        >
                            <A href=FEED_PATH attr:class="layout-nav-link" on:click=close_menu>
                                "Лента"
                            </A>
                            <A href=profile_href attr:class="layout-nav-link" on:click=close_menu>
                                "Профиль"
                            </A>
                            <span class="layout-username">
                                {move || session.with(|s| s.user().map(|u| u.username.clone()))}
                            </span>
                            <button class="layout-logout-btn" on:click=on_logout.clone()>
                                "Выйти"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>

            <main class="layout-main">
                <div class="layout-content">{children()}</div>
            </main>
        </div>
    }
}
