//! Post-detail page state: the post, its comments, and the comment draft.
//!
//! Comment writes are followed by a full refetch of the comment list; the
//! list is replaced wholesale with whatever the backend returns.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use super::session::Session;
use super::view::ViewState;
use crate::net::error::ApiError;
use crate::net::types::{Comment, Post};

pub const POST_LOAD_FAILED: &str = "Не удалось загрузить пост";
pub const POST_NOT_FOUND: &str = "Пост не найден";
pub const POST_DELETE_FAILED: &str = "Не удалось удалить пост";
pub const COMMENT_CREATE_FAILED: &str = "Не удалось добавить комментарий";
pub const COMMENT_DELETE_FAILED: &str = "Не удалось удалить комментарий";
pub const CONFIRM_DELETE_POST: &str = "Вы уверены, что хотите удалить этот пост?";
pub const CONFIRM_DELETE_COMMENT: &str = "Вы уверены, что хотите удалить этот комментарий?";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDetailState {
    pub post: ViewState<Post>,
    pub comments: Vec<Comment>,
    pub draft: String,
    pub submitting: bool,
}

impl PostDetailState {
    /// Store the post fetch outcome; 404 reads as "not found".
    pub fn apply_post(&mut self, result: Result<Post, ApiError>) {
        self.post = ViewState::from_result(result, |e| {
            let message = if e.is_not_found() { POST_NOT_FOUND } else { POST_LOAD_FAILED };
            message.to_owned()
        });
    }

    /// Replace the list with a fresh fetch.
    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    /// Draft accepted by the backend: clear the input.
    pub fn comment_posted(&mut self) {
        self.draft.clear();
        self.submitting = false;
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Only the author sees the delete-post button.
    pub fn can_delete_post(&self, session: &Session) -> bool {
        self.post
            .ready()
            .zip(session.user_id())
            .is_some_and(|(post, user_id)| post.is_authored_by(user_id))
    }
}

/// Whether the session user may delete `comment`.
pub fn can_delete_comment(comment: &Comment, session: &Session) -> bool {
    session.user_id().is_some_and(|user_id| comment.is_authored_by(user_id))
}
