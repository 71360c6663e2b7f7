//! Single post with its comment thread.
//!
//! Comment writes refetch the whole thread afterwards rather than patching the
//! local list, so the page always shows the backend's ordering.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::comment_card::CommentCard;
use crate::components::layout::Layout;
use crate::net::api::BlogApi;
use crate::state::forms::{COMMENT_MAX_CHARS, char_count, validate_comment_content};
#[cfg(feature = "csr")]
use crate::state::forms::{FailureResponse, respond_to_failure};
use crate::state::post::{CONFIRM_DELETE_POST, POST_NOT_FOUND, PostDetailState, can_delete_comment};
#[cfg(feature = "csr")]
use crate::state::post::{COMMENT_CREATE_FAILED, POST_DELETE_FAILED};
use crate::state::profile::avatar_initial;
use crate::state::session::Session;
use crate::state::view::ViewState;
use crate::util::auth::{FEED_PATH, Route};
#[cfg(feature = "csr")]
use crate::util::auth::LOGIN_PATH;
use crate::util::{browser, dates};

const UNKNOWN_AUTHOR: &str = "Неизвестный пользователь";

#[cfg(feature = "csr")]
async fn refresh_comments(api: &BlogApi, post_id: i64, state: RwSignal<PostDetailState>) {
    match api.list_comments(post_id).await {
        Ok(comments) => state.update(|s| s.replace_comments(comments)),
        Err(e) => leptos::logging::warn!("comments for post {post_id} failed: {e}"),
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let api = expect_context::<BlogApi>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let post_id = params.with_untracked(|p| p.get("id")).and_then(|raw| raw.parse::<i64>().ok());

    let state = RwSignal::new(PostDetailState::default());
    let comment_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let post_view = Memo::new(move |_| state.with(|s| s.post.clone()));

    match post_id {
        Some(id) => {
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = api.get_post(id).await;
                    if let Err(e) = &result {
                        leptos::logging::warn!("post {id} failed: {e}");
                    }
                    state.update(|s| s.apply_post(result));
                    refresh_comments(&api, id, state).await;
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = id;
        }
        None => state.update(|s| s.post = ViewState::Error(POST_NOT_FOUND.to_owned())),
    }

    let on_delete_post = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = post_id else {
                return;
            };
            if deleting.get_untracked() || !browser::confirm(CONFIRM_DELETE_POST) {
                return;
            }
            deleting.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                match api.delete_post(id).await {
                    Ok(()) => navigate(FEED_PATH, NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("delete post {id} failed: {e}");
                        match respond_to_failure(&e, POST_DELETE_FAILED) {
                            FailureResponse::Login => navigate(LOGIN_PATH, NavigateOptions::default()),
                            FailureResponse::Show(message) => browser::alert(&message),
                        }
                        deleting.set(false);
                    }
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (id, api, navigate);
        }
    };

    let on_submit_comment = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(id) = post_id else {
                return;
            };
            if state.with_untracked(|s| s.submitting) {
                return;
            }
            let content = match state.with_untracked(|s| validate_comment_content(&s.draft)) {
                Ok(content) => content,
                Err(message) => {
                    comment_error.set(Some(message.to_owned()));
                    return;
                }
            };
            comment_error.set(None);
            state.update(|s| s.submitting = true);

            let api = api.clone();
            let navigate = navigate.clone();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                match api.create_comment(id, &content).await {
                    Ok(_) => {
                        state.update(PostDetailState::comment_posted);
                        refresh_comments(&api, id, state).await;
                    }
                    Err(e) => {
                        leptos::logging::warn!("comment on post {id} failed: {e}");
                        state.update(|s| s.submitting = false);
                        match respond_to_failure(&e, COMMENT_CREATE_FAILED) {
                            FailureResponse::Login => navigate(LOGIN_PATH, NavigateOptions::default()),
                            FailureResponse::Show(message) => browser::alert(&message),
                        }
                    }
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = (id, api, navigate, content);
        }
    };

    let on_comment_deleted = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(id) = post_id else {
                return;
            };
            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move { refresh_comments(&api, id, state).await });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (id, &api);
        }
    });

    let back_to_feed = move || {
        view! {
            <A href=FEED_PATH attr:class="back-button">
                "← Назад к ленте"
            </A>
        }
    };

    let body = move || match post_view.get() {
        ViewState::Loading => view! { <div class="loading">"Загрузка..."</div> }.into_any(),
        ViewState::Error(message) => view! {
            <div class="error">{message}</div>
            {back_to_feed()}
        }
        .into_any(),
        ViewState::Ready(post) => {
            let is_author = state.with_untracked(|s| s.can_delete_post(&session.get_untracked()));
            let (author_name, author_href) = post.author.as_ref().map_or_else(
                || (UNKNOWN_AUTHOR.to_owned(), None),
                |a| (a.username.clone(), Some(Route::Profile(a.id).path())),
            );
            let initial = avatar_initial(&author_name);
            let date = dates::date_time_label(&post.created_at);
            let edited = post.is_edited();
            let on_delete_post = on_delete_post.clone();
            let on_submit_comment = on_submit_comment.clone();

            view! {
                {back_to_feed()}

                <article class="post-detail">
                    <div class="post-header">
                        <div class="post-author-info">
                            <div class="author-avatar">{initial}</div>
                            {match author_href {
                                Some(href) => view! {
                                    <A href=href attr:class="author-name">{author_name}</A>
                                }
                                .into_any(),
                                None => view! { <div class="author-name">{author_name}</div> }.into_any(),
                            }}
                            <div class="post-date">{date}</div>
                            <Show when=move || edited>
                                <span class="edited-badge">"Изменено"</span>
                            </Show>
                        </div>
                        <Show when=move || is_author>
                            <button
                                class="delete-post-button"
                                disabled=move || deleting.get()
                                on:click=on_delete_post.clone()
                            >
                                "Удалить пост"
                            </button>
                        </Show>
                    </div>
                    <div class="post-content">{post.content}</div>
                </article>

                <section class="comments-section">
                    <h2 class="comments-title">
                        {move || format!("Комментарии ({})", state.with(PostDetailState::comment_count))}
                    </h2>

                    <form class="comment-form" on:submit=on_submit_comment>
                        <textarea
                            class="comment-input"
                            placeholder="Напишите комментарий..."
                            rows="3"
                            maxlength=COMMENT_MAX_CHARS
                            prop:value=move || state.with(|s| s.draft.clone())
                            on:input=move |ev| {
                                comment_error.set(None);
                                state.update(|s| s.draft = event_target_value(&ev));
                            }
                            disabled=move || state.with(|s| s.submitting)
                        ></textarea>
                        <div class="form-footer">
                            <span class="char-count">
                                {move || format!("{} / {COMMENT_MAX_CHARS}", state.with(|s| char_count(&s.draft)))}
                            </span>
                            <button
                                type="submit"
                                class="submit-comment-button"
                                disabled=move || state.with(|s| s.submitting || s.draft.trim().is_empty())
                            >
                                {move || {
                                    if state.with(|s| s.submitting) { "Отправка..." } else { "Добавить комментарий" }
                                }}
                            </button>
                        </div>
                        <Show when=move || comment_error.with(Option::is_some)>
                            <div class="error-message">{move || comment_error.get().unwrap_or_default()}</div>
                        </Show>
                    </form>

                    <div class="comments-list">
                        <Show when=move || state.with(|s| s.comments.is_empty())>
                            <div class="no-comments">"Пока нет комментариев"</div>
                        </Show>
                        <For
                            each=move || state.with(|s| s.comments.clone())
                            key=|comment| comment.id
                            children=move |comment| {
                                let can_delete = can_delete_comment(&comment, &session.get_untracked());
                                view! {
                                    <CommentCard comment=comment can_delete=can_delete on_deleted=on_comment_deleted/>
                                }
                            }
                        />
                    </div>
                </section>
            }
            .into_any()
        }
    };

    view! {
        <Layout>
            <div class="post-page">
                <div class="post-page-container">{body}</div>
            </div>
        </Layout>
    }
}
