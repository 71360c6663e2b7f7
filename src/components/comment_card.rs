//! Single comment with an author-only delete action.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::BlogApi;
use crate::net::types::Comment;
#[cfg(feature = "csr")]
use crate::state::forms::{FailureResponse, respond_to_failure};
use crate::state::post::CONFIRM_DELETE_COMMENT;
#[cfg(feature = "csr")]
use crate::state::post::COMMENT_DELETE_FAILED;
#[cfg(feature = "csr")]
use crate::util::auth::LOGIN_PATH;
use crate::util::{browser, dates};

const UNKNOWN_AUTHOR: &str = "Неизвестный пользователь";

/// `on_deleted` fires after the backend accepted the delete; the caller
/// refetches its list.
#[component]
pub fn CommentCard(
    comment: Comment,
    #[prop(optional)] can_delete: bool,
    #[prop(optional)] on_deleted: Option<Callback<()>>,
) -> impl IntoView {
    let api = expect_context::<BlogApi>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let comment_id = comment.id;
    let author = comment
        .author
        .as_ref()
        .map_or_else(|| UNKNOWN_AUTHOR.to_owned(), |a| a.username.clone());
    let date = dates::date_time_label(&comment.created_at);

    let on_delete = move |_| {
        if busy.get_untracked() || !browser::confirm(CONFIRM_DELETE_COMMENT) {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.delete_comment(comment_id).await {
                Ok(()) => {
                    if let Some(on_deleted) = on_deleted {
                        on_deleted.run(());
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("comment {comment_id} delete failed: {e}");
                    match respond_to_failure(&e, COMMENT_DELETE_FAILED) {
                        FailureResponse::Login => navigate(LOGIN_PATH, NavigateOptions::default()),
                        FailureResponse::Show(message) => browser::alert(&message),
                    }
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, navigate, on_deleted);
    };

    view! {
        <div class="comment-card">
            <div class="comment-header">
                <div class="comment-author-info">
                    <div class="comment-author-name">{author}</div>
                    <div class="comment-date">{date}</div>
                </div>
                <Show when=move || can_delete>
                    <button
                        class="delete-comment-button"
                        disabled=move || busy.get()
                        on:click=on_delete.clone()
                    >
                        "Удалить"
                    </button>
                </Show>
            </div>
            <div class="comment-content">{comment.content}</div>
        </div>
    }
}
