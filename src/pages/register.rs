//! Account registration page.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
#[cfg(feature = "csr")]
use crate::state::forms::classify_register_error;
use crate::state::forms::{FormErrors, RegisterForm};
use crate::state::session::BlogSessionStore;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<BlogSessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
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
            match store.register(&request).await {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    errors.set(classify_register_error(&e));
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
                <h1>"Создать аккаунт"</h1>
                <p class="auth-card__subtitle">"Присоединяйтесь к нашему сообществу"</p>

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
                        label="Email"
                        name="email"
                        kind="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
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
                    <FormField
                        label="Подтверждение пароля"
                        name="password_confirm"
                        kind="password"
                        placeholder="Повторите пароль"
                        value=Signal::derive(move || form.with(|f| f.password_confirm.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.password_confirm = v))
                        errors=errors
                        disabled=busy
                    />
                    <button class="submit-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Регистрация..." } else { "Зарегистрироваться" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Уже есть аккаунт? "
                    <A href=LOGIN_PATH>"Войти"</A>
                </p>
            </div>
        </div>
    }
}
