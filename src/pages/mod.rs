//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one view-state model from `crate::state` in a local
//! `RwSignal` and talks to the backend through the `BlogApi` context. Pages
//! behind authentication are mounted inside `RouteGate`, so none of their
//! fetches start before the session is known.

pub mod feed;
pub mod login;
pub mod not_found;
pub mod post;
pub mod profile;
pub mod register;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;

use crate::net::api::BlogApi;
use crate::state::feed::PostListState;
#[cfg(feature = "csr")]
use crate::state::feed::POSTS_LOAD_FAILED;
#[cfg(feature = "csr")]
use crate::state::forms::{FailureResponse, respond_to_failure};
#[cfg(feature = "csr")]
use crate::util::auth::LOGIN_PATH;

/// Which backend listing feeds a `PostListState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostSource {
    Feed,
    Profile(i64),
}

/// Fetch `page` into `list`. A 401 sends the user to `/login`.
pub fn load_post_page<N>(
    api: BlogApi,
    source: PostSource,
    list: RwSignal<PostListState>,
    page: u32,
    page_size: u32,
    navigate: N,
) where
    N: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = match source {
            PostSource::Feed => api.list_posts(page, page_size).await,
            PostSource::Profile(user_id) => api.list_profile_posts(user_id, page, page_size).await,
        };
        match result {
            Ok(data) => list.update(|l| l.apply_page(page, data)),
            Err(e) => {
                leptos::logging::warn!("{source:?} page {page} failed: {e}");
                match respond_to_failure(&e, POSTS_LOAD_FAILED) {
                    FailureResponse::Login => {
                        list.update(|l| l.loading = false);
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    FailureResponse::Show(message) => list.update(|l| l.apply_error(message)),
                }
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (api, source, list, page, page_size, navigate);
}
