use super::*;
use crate::net::types::{Author, User};

// =============================================================
// Helpers
// =============================================================

fn author(id: i64) -> Option<Author> {
    Some(Author { id, username: format!("user{id}") })
}

fn make_post(author_id: i64) -> Post {
    Post {
        id: 42,
        content: "hello".to_owned(),
        author: author(author_id),
        created_at: "2024-01-05T10:00:00Z".to_owned(),
        updated_at: "2024-01-05T10:00:00Z".to_owned(),
        comments_count: 2,
    }
}

fn make_comment(id: i64, author_id: i64) -> Comment {
    Comment {
        id,
        content: format!("comment {id}"),
        author: author(author_id),
        created_at: "2024-01-05T10:00:00Z".to_owned(),
    }
}

fn session_for(id: i64) -> Session {
    Session::authenticated(User { id, username: format!("user{id}"), email: None, created_at: None })
}

// =============================================================
// Post loading
// =============================================================

#[test]
fn default_is_loading_with_no_comments() {
    let state = PostDetailState::default();
    assert!(state.post.is_loading());
    assert_eq!(state.comment_count(), 0);
    assert!(!state.submitting);
}

#[test]
fn apply_post_success_is_ready() {
    let mut state = PostDetailState::default();
    state.apply_post(Ok(make_post(1)));
    assert_eq!(state.post.ready().map(|p| p.id), Some(42));
}

#[test]
fn apply_post_not_found_message() {
    let mut state = PostDetailState::default();
    state.apply_post(Err(ApiError::from_status(404, r#"{"error": "Post not found"}"#)));
    assert_eq!(state.post.error(), Some(POST_NOT_FOUND));
}

#[test]
fn apply_post_other_failure_message() {
    let mut state = PostDetailState::default();
    state.apply_post(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.post.error(), Some(POST_LOAD_FAILED));
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn only_author_can_delete_post() {
    let mut state = PostDetailState::default();
    assert!(!state.can_delete_post(&session_for(1)));
    state.apply_post(Ok(make_post(1)));
    assert!(state.can_delete_post(&session_for(1)));
    assert!(!state.can_delete_post(&session_for(2)));
    assert!(!state.can_delete_post(&Session::anonymous()));
}

#[test]
fn only_author_can_delete_comment() {
    let comment = make_comment(1, 5);
    assert!(can_delete_comment(&comment, &session_for(5)));
    assert!(!can_delete_comment(&comment, &session_for(6)));
    let orphan = Comment { author: None, ..make_comment(2, 5) };
    assert!(!can_delete_comment(&orphan, &session_for(5)));
}

// =============================================================
// Comments
// =============================================================

#[test]
fn delete_then_refetch_shrinks_list_by_one() {
    let mut state = PostDetailState::default();
    state.replace_comments(vec![make_comment(1, 5), make_comment(2, 6), make_comment(3, 5)]);
    let before = state.comment_count();

    // Backend list after deleting comment 2.
    state.replace_comments(vec![make_comment(1, 5), make_comment(3, 5)]);
    assert_eq!(state.comment_count(), before - 1);
    assert_eq!(state.comments.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn comment_posted_clears_draft() {
    let mut state = PostDetailState { draft: "nice".to_owned(), submitting: true, ..PostDetailState::default() };
    state.comment_posted();
    assert!(state.draft.is_empty());
    assert!(!state.submitting);
}
