//! User profile: header, bio editor for the owner, and the user's posts.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{PostSource, load_post_page};
use crate::components::layout::Layout;
use crate::components::post_list::PostList;
use crate::config::ClientConfig;
use crate::net::api::BlogApi;
use crate::state::feed::PostListState;
use crate::state::forms::{BIO_MAX_CHARS, char_count, validate_bio};
#[cfg(feature = "csr")]
use crate::state::forms::{FailureResponse, respond_to_failure};
#[cfg(feature = "csr")]
use crate::state::profile::PROFILE_UPDATE_FAILED;
use crate::state::profile::{PROFILE_LOAD_FAILED, ProfileState, avatar_initial};
use crate::state::session::Session;
use crate::state::view::ViewState;
use crate::util::auth::FEED_PATH;
#[cfg(feature = "csr")]
use crate::util::auth::LOGIN_PATH;
use crate::util::dates;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<BlogApi>();
    let page_size = expect_context::<ClientConfig>().page_size;
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let user_id = params.with_untracked(|p| p.get("id")).and_then(|raw| raw.parse::<i64>().ok());

    let state = RwSignal::new(ProfileState::default());
    let posts = RwSignal::new(PostListState::default());
    let profile_view = Memo::new(move |_| state.with(|s| s.profile.clone()));

    match user_id {
        Some(id) => {
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = api.get_profile(id).await;
                    let loaded = result.is_ok();
                    if let Err(e) = &result {
                        leptos::logging::warn!("profile {id} failed: {e}");
                    }
                    state.update(|s| s.apply_profile(result));
                    if loaded {
                        let first = posts.try_update(PostListState::begin_first_page).unwrap_or(1);
                        load_post_page(api, PostSource::Profile(id), posts, first, page_size, navigate);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = id;
        }
        None => state.update(|s| s.profile = ViewState::Error(PROFILE_LOAD_FAILED.to_owned())),
    }

    let on_load_more = Callback::new({
        let api = api.clone();
        let navigate = navigate.clone();
        move |()| {
            let Some(id) = user_id else {
                return;
            };
            if let Some(page) = posts.try_update(PostListState::next_page).flatten() {
                load_post_page(api.clone(), PostSource::Profile(id), posts, page, page_size, navigate.clone());
            }
        }
    });

    let close_editor = move || state.update(ProfileState::close_editor);

    let on_save_bio = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.editor.saving) {
            return;
        }
        let bio = match state.with_untracked(|s| validate_bio(&s.editor.draft)) {
            Ok(bio) => bio,
            Err(message) => {
                state.update(|s| s.apply_save_error(message.to_owned()));
                return;
            }
        };
        state.update(ProfileState::begin_save);

        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.update_profile(&bio).await {
                Ok(profile) => state.update(|s| s.apply_saved(profile)),
                Err(e) => {
                    leptos::logging::warn!("profile update failed: {e}");
                    match respond_to_failure(&e, PROFILE_UPDATE_FAILED) {
                        FailureResponse::Login => {
                            state.update(|s| s.editor.saving = false);
                            navigate(LOGIN_PATH, NavigateOptions::default());
                        }
                        FailureResponse::Show(message) => state.update(|s| s.apply_save_error(message)),
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, navigate, bio);
    };

    let editor = move || {
        let on_save_bio = on_save_bio.clone();
        view! {
            <div class="modal-overlay" on:click=move |_| close_editor()>
                <div
                    class="modal-content"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_editor();
                        }
                    }
                    tabindex="0"
                >
                    <div class="modal-header">
                        <h2>"Редактировать профиль"</h2>
                        <button class="close-modal" on:click=move |_| close_editor()>
                            "✕"
                        </button>
                    </div>

                    <form class="edit-form" on:submit=on_save_bio>
                        <div class="form-group">
                            <label for="bio">"Биография"</label>
                            <textarea
                                id="bio"
                                class="bio-textarea"
                                placeholder="Расскажите о себе..."
                                rows="5"
                                maxlength=BIO_MAX_CHARS
                                prop:value=move || state.with(|s| s.editor.draft.clone())
                                on:input=move |ev| state.update(|s| s.editor.draft = event_target_value(&ev))
                            ></textarea>
                            <div class="char-counter">
                                {move || format!("{}/{BIO_MAX_CHARS}", state.with(|s| char_count(&s.editor.draft)))}
                            </div>
                        </div>

                        <Show when=move || state.with(|s| s.editor.error.is_some())>
                            <div class="update-error">
                                {move || state.with(|s| s.editor.error.clone().unwrap_or_default())}
                            </div>
                        </Show>

                        <div class="modal-actions">
                            <button
                                type="button"
                                class="cancel-button"
                                disabled=move || state.with(|s| s.editor.saving)
                                on:click=move |_| close_editor()
                            >
                                "Отмена"
                            </button>
                            <button type="submit" class="save-button" disabled=move || state.with(|s| s.editor.saving)>
                                {move || if state.with(|s| s.editor.saving) { "Сохранение..." } else { "Сохранить" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    };

    let body = move || match profile_view.get() {
        ViewState::Loading => view! {
            <div class="profile-loading">
                <div class="spinner"></div>
                <p>"Загрузка профиля..."</p>
            </div>
        }
        .into_any(),
        ViewState::Error(message) => view! {
            <div class="profile-error">
                <p>{message}</p>
                <A href=FEED_PATH attr:class="back-button">
                    "Вернуться к ленте"
                </A>
            </div>
        }
        .into_any(),
        ViewState::Ready(profile) => {
            let is_own = session.with_untracked(|s| s.is_owner(profile.id));
            let initial = avatar_initial(&profile.username);
            let joined = dates::long_date_label(&profile.created_at);
            let bio = profile.bio.clone().filter(|b| !b.is_empty());
            let editor = editor.clone();

            view! {
                <div class="profile-container">
                    <div class="profile-header">
                        <div class="profile-avatar">
                            {match profile.avatar_url.clone() {
                                Some(src) => view! { <img class="avatar-image" src=src alt=profile.username.clone()/> }.into_any(),
                                None => view! { <div class="avatar-placeholder">{initial}</div> }.into_any(),
                            }}
                        </div>

                        <div class="profile-info">
                            <div class="profile-username-row">
                                <h1 class="profile-username">{profile.username.clone()}</h1>
                                <Show when=move || is_own>
                                    <button
                                        class="edit-profile-button"
                                        on:click=move |_| state.update(ProfileState::open_editor)
                                    >
                                        "Редактировать профиль"
                                    </button>
                                </Show>
                            </div>

                            <div class="profile-stats">
                                <div class="stat-item">
                                    <span class="stat-value">{profile.posts_count}</span>
                                    <span class="stat-label">" постов"</span>
                                </div>
                                <div class="stat-item">
                                    <span class="stat-label">{format!("На сайте с {joined}")}</span>
                                </div>
                            </div>

                            {bio.map(|text| view! { <div class="profile-bio"><p>{text}</p></div> })}
                        </div>
                    </div>

                    <div class="profile-posts-section">
                        <h2 class="posts-section-title">"Посты пользователя"</h2>
                        <PostList
                            list=posts
                            on_load_more=on_load_more
                            empty_text="Пользователь пока не создал ни одного поста"
                        />
                    </div>
                </div>

                <Show when=move || state.with(|s| s.editor.open)>{editor()}</Show>
            }
            .into_any()
        }
    };

    view! {
        <Layout>
            <div class="profile-page">{body}</div>
        </Layout>
    }
}
