//! Feed and profile list item for a single post.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Post;
use crate::state::profile::avatar_initial;
use crate::util::auth::Route;
use crate::util::dates;

const ANONYMOUS_AUTHOR: &str = "Аноним";

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = Route::Post(post.id).path();
    let edited = post.is_edited();
    let date = dates::relative_label(&post.created_at);
    let comments = format!("{} комментариев", post.comments_count);
    let (author_name, author_href) = post.author.as_ref().map_or_else(
        || (ANONYMOUS_AUTHOR.to_owned(), None),
        |a| (a.username.clone(), Some(Route::Profile(a.id).path())),
    );
    let initial = avatar_initial(post.author.as_ref().map_or("", |a| a.username.as_str()));

    view! {
        <article class="post-card">
            <div class="post-card-header">
                <div class="author-info">
                    <div class="author-avatar">{initial}</div>
                    <div class="author-details">
                        {match author_href {
                            Some(profile) => {
                                view! {
                                    <A href=profile attr:class="author-name">
                                        {author_name}
                                    </A>
                                }
                                    .into_any()
                            }
                            None => view! { <span class="author-name">{author_name}</span> }.into_any(),
                        }}
                        <div class="post-date">{date}</div>
                    </div>
                </div>
            </div>

            <A href=href.clone() attr:class="post-card-content">
                <p>{post.content}</p>
            </A>

            <div class="post-card-footer">
                <div class="post-stats">
                    <A href=href attr:class="stat-item">
                        <span>{comments}</span>
                    </A>
                    <Show when=move || edited>
                        <div class="edited-badge">"Изменено"</div>
                    </Show>
                </div>
            </div>
        </article>
    }
}
