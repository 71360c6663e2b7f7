//! Paginated post list state shared by the feed and profile pages.
//!
//! DESIGN
//! ======
//! Page 1 replaces the list, later pages append. Pages are requested one at a
//! time: `next_page` refuses while a fetch is in flight, and because the flag
//! flips synchronously on click a second click cannot start a parallel fetch.
//! A failed page is rolled back, so the next request asks for it again.
//! Responses are applied in arrival order with no sequencing beyond that.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{Page, Post};

pub const POSTS_LOAD_FAILED: &str = "Ошибка загрузки постов";
pub const POST_CREATE_FAILED: &str = "Ошибка создания поста";

#[derive(Clone, Debug, PartialEq)]
pub struct PostListState {
    pub posts: Vec<Post>,
    /// Last page requested (1-based).
    pub page: u32,
    /// Backend reported a further page on the last response.
    pub has_more: bool,
    /// Total posts according to the backend, adjusted by local creates.
    pub total_count: i64,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PostListState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            has_more: true,
            total_count: 0,
            loading: false,
            error: None,
        }
    }
}

impl PostListState {
    /// Start (or restart) from page 1. Returns the page to fetch.
    pub fn begin_first_page(&mut self) -> u32 {
        self.page = 1;
        self.loading = true;
        self.error = None;
        self.page
    }

    /// Advance to the next page if one exists and nothing is in flight.
    pub fn next_page(&mut self) -> Option<u32> {
        if self.loading || !self.has_more {
            return None;
        }
        self.page += 1;
        self.loading = true;
        self.error = None;
        Some(self.page)
    }

    /// Apply a fetched page: page 1 replaces, later pages append.
    ///
    /// Posts already listed are skipped when appending; a local `prepend`
    /// shifts the backend's page offsets, so the next page repeats one.
    pub fn apply_page(&mut self, page: u32, data: Page<Post>) {
        self.has_more = data.has_next();
        self.total_count = data.count;
        if page <= 1 {
            self.posts = data.results;
        } else {
            for post in data.results {
                if !self.posts.iter().any(|p| p.id == post.id) {
                    self.posts.push(post);
                }
            }
        }
        self.loading = false;
    }

    /// A failed later page is rolled back so the next "load more" retries it.
    pub fn apply_error(&mut self, message: String) {
        if self.page > 1 {
            self.page -= 1;
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Show a freshly created post without refetching.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.total_count += 1;
    }

    /// "Load more" is offered only below a non-empty list with more pages.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.posts.is_empty()
    }

    /// Spinner for the very first page only; later pages keep the list visible.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.page == 1
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && !self.loading
    }
}
