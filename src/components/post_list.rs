//! Paginated post list with the initial spinner and "load more" button.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::feed::PostListState;

#[component]
pub fn PostList(
    list: RwSignal<PostListState>,
    on_load_more: Callback<()>,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    view! {
        <div class="posts-list">
            <Show when=move || list.with(|l| l.error.is_some())>
                <div class="error-message">{move || list.get().error.unwrap_or_default()}</div>
            </Show>

            <Show when=move || list.with(PostListState::is_empty)>
                <div class="empty-state">
                    <p>{empty_text.clone()}</p>
                </div>
            </Show>

            <For
                each=move || list.get().posts
                key=|post| post.id
                children=move |post| view! { <PostCard post=post/> }
            />

            <Show when=move || list.with(PostListState::is_initial_loading)>
                <div class="loading-state">
                    <div class="spinner"></div>
                    <p>"Загрузка постов..."</p>
                </div>
            </Show>

            <Show when=move || list.with(PostListState::can_load_more)>
                <button
                    class="load-more-button"
                    disabled=move || list.with(|l| l.loading)
                    on:click=move |_| on_load_more.run(())
                >
                    {move || if list.with(|l| l.loading) { "Загрузка..." } else { "Загрузить ещё" }}
                </button>
            </Show>
        </div>
    }
}
