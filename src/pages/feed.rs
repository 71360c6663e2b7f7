//! Main feed: create-post form plus the paginated list of all posts.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{PostSource, load_post_page};
use crate::components::layout::Layout;
use crate::components::post_list::PostList;
use crate::config::ClientConfig;
use crate::net::api::BlogApi;
use crate::state::feed::PostListState;
#[cfg(feature = "csr")]
use crate::state::feed::POST_CREATE_FAILED;
#[cfg(feature = "csr")]
use crate::state::forms::{FailureResponse, respond_to_failure};
use crate::state::forms::{POST_MAX_CHARS, char_count, validate_post_content};
#[cfg(feature = "csr")]
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn FeedPage() -> impl IntoView {
    let api = expect_context::<BlogApi>();
    let page_size = expect_context::<ClientConfig>().page_size;
    let navigate = use_navigate();

    let list = RwSignal::new(PostListState::default());
    let draft = RwSignal::new(String::new());
    let create_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let first_page = list.try_update(PostListState::begin_first_page).unwrap_or(1);
    load_post_page(api.clone(), PostSource::Feed, list, first_page, page_size, navigate.clone());

    let on_load_more = Callback::new({
        let api = api.clone();
        let navigate = navigate.clone();
        move |()| {
            if let Some(page) = list.try_update(PostListState::next_page).flatten() {
                load_post_page(api.clone(), PostSource::Feed, list, page, page_size, navigate.clone());
            }
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let content = match validate_post_content(&draft.get_untracked()) {
            Ok(content) => content,
            Err(message) => {
                create_error.set(Some(message.to_owned()));
                return;
            }
        };
        create_error.set(None);
        creating.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.create_post(&content).await {
                Ok(post) => {
                    list.update(|l| l.prepend(post));
                    draft.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("create post failed: {e}");
                    match respond_to_failure(&e, POST_CREATE_FAILED) {
                        FailureResponse::Login => navigate(LOGIN_PATH, NavigateOptions::default()),
                        FailureResponse::Show(message) => create_error.set(Some(message)),
                    }
                }
            }
            creating.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, navigate, content);
    };

    view! {
        <Layout>
            <div class="feed-page">
                <div class="feed-container">
                    <header class="feed-header">
                        <h1>"Лента новостей"</h1>
                        <p class="feed-count">"Всего постов: " {move || list.with(|l| l.total_count)}</p>
                    </header>

                    <form class="create-post-form" on:submit=on_create>
                        <h2>"Создать новый пост"</h2>
                        <textarea
                            class="post-textarea"
                            placeholder="Поделитесь своими мыслями..."
                            rows="4"
                            maxlength=POST_MAX_CHARS
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            disabled=move || creating.get()
                        ></textarea>
                        <div class="form-footer">
                            <span class="char-count">
                                {move || format!("{} / {POST_MAX_CHARS}", draft.with(|d| char_count(d)))}
                            </span>
                            <button
                                type="submit"
                                class="submit-button"
                                disabled=move || creating.get() || draft.with(|d| d.trim().is_empty())
                            >
                                {move || if creating.get() { "Публикация..." } else { "Опубликовать" }}
                            </button>
                        </div>
                    </form>

                    <Show when=move || create_error.with(Option::is_some)>
                        <div class="error-message">{move || create_error.get().unwrap_or_default()}</div>
                    </Show>

                    <PostList list=list on_load_more=on_load_more empty_text="Пока нет постов. Создайте первый!"/>
                </div>
            </div>
        </Layout>
    }
}
