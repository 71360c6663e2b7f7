//! Username + password login page.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
#[cfg(feature = "csr")]
use crate::state::forms::classify_login_error;
use crate::state::forms::{FormErrors, LoginForm};
use crate::state::session::BlogSessionStore;
use crate::util::auth::REGISTER_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<BlogSessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(local) => {
                errors.set(local);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match store.login(&request).await {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    errors.set(classify_login_error(&e));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (store, navigate, request);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Вход в аккаунт"</h1>
                <p class="auth-card__subtitle">"Добро пожаловать обратно"</p>

                <Show when=move || errors.with(|e| e.general.is_some())>
                    <div class="error-message">{move || errors.get().general.unwrap_or_default()}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Имя пользователя"
                        name="username"
                        placeholder="Введите имя пользователя"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.username = v))
                        errors=errors
                        disabled=busy
                    />
                    <FormField
                        label="Пароль"
                        name="password"
                        kind="password"
                        placeholder="Введите пароль"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        errors=errors
                        disabled=busy
                    />
                    <button class="submit-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Нет аккаунта? "
                    <A href=REGISTER_PATH>"Зарегистрироваться"</A>
                </p>
            </div>
        </div>
    }
}
