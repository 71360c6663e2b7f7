use super::*;

// =============================================================
// Entities
// =============================================================

#[test]
fn user_deserializes_member_payload() {
    let json = r#"{"id": 7, "username": "anna", "email": "a@b.ru", "created_at": "2024-01-05T10:00:00Z"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "anna");
    assert_eq!(user.email.as_deref(), Some("a@b.ru"));
}

#[test]
fn user_tolerates_minimal_payload() {
    let user: User = serde_json::from_str(r#"{"id": 1, "username": "x"}"#).unwrap();
    assert!(user.email.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn post_defaults_missing_comment_count_to_zero() {
    let json = r#"{
        "id": 3,
        "content": "hello",
        "author": {"id": 1, "username": "anna", "email": "a@b.ru"},
        "created_at": "2024-01-05T10:00:00Z",
        "updated_at": "2024-01-05T10:00:00Z"
    }"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.comments_count, 0);
    assert!(post.is_authored_by(1));
    assert!(!post.is_authored_by(2));
    assert!(!post.is_edited());
}

#[test]
fn post_is_edited_when_timestamps_differ() {
    let json = r#"{
        "id": 3,
        "content": "hello",
        "author": null,
        "created_at": "2024-01-05T10:00:00Z",
        "updated_at": "2024-01-06T10:00:00Z",
        "comments_count": 4.0
    }"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert!(post.is_edited());
    assert_eq!(post.comments_count, 4);
    assert!(!post.is_authored_by(1));
}

#[test]
fn comment_ownership_uses_author_id() {
    let json = r#"{"id": 9, "content": "c", "author": {"id": 5, "username": "b"}, "post_id": 3, "created_at": "2024-01-05T10:00:00Z"}"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert!(comment.is_authored_by(5));
    assert!(!comment.is_authored_by(6));
}

#[test]
fn profile_bio_text_collapses_null() {
    let json = r#"{"id": 1, "username": "anna", "bio": null, "avatar_url": "", "posts_count": 2, "created_at": "2024-01-05T10:00:00Z"}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.bio_text(), "");
    assert_eq!(profile.posts_count, 2);
}

#[test]
fn profile_rejects_non_numeric_posts_count() {
    let json = r#"{"id": 1, "username": "anna", "posts_count": "many", "created_at": "x"}"#;
    assert!(serde_json::from_str::<Profile>(json).is_err());
}

// =============================================================
// Page
// =============================================================

#[test]
fn page_reports_next() {
    let json = r#"{"results": [], "count": 25, "next": "http://h/api/posts/?page=2", "previous": null}"#;
    let page: Page<Post> = serde_json::from_str(json).unwrap();
    assert!(page.has_next());
    assert_eq!(page.count, 25);
}

#[test]
fn page_without_next_is_last() {
    let page: Page<Post> = serde_json::from_str(r#"{"results": [], "count": 0, "next": null}"#).unwrap();
    assert!(!page.has_next());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_reads_field_lists() {
    let json = r#"{"error": "Validation error", "details": {"password_confirm": ["Passwords do not match", "second"]}}"#;
    let body: ErrorBody = serde_json::from_str(json).unwrap();
    assert_eq!(body.error.as_deref(), Some("Validation error"));
    assert_eq!(body.details["password_confirm"].first(), Some("Passwords do not match"));
}

#[test]
fn error_body_accepts_plain_string_details() {
    let body: ErrorBody = serde_json::from_str(r#"{"details": {"password_confirm": "Passwords do not match"}}"#).unwrap();
    assert_eq!(body.details["password_confirm"].first(), Some("Passwords do not match"));
    assert!(body.error.is_none());
}

#[test]
fn field_messages_empty_list_has_no_first() {
    assert_eq!(FieldMessages::Many(Vec::new()).first(), None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_backend_field_names() {
    let req = RegisterRequest {
        username: "anna".to_owned(),
        email: "a@b.ru".to_owned(),
        password: "secret123".to_owned(),
        password_confirm: "secret123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "username": "anna",
            "email": "a@b.ru",
            "password": "secret123",
            "password_confirm": "secret123"
        })
    );
}

#[test]
fn profile_update_serializes_bio_only() {
    let body = ProfileUpdate { bio: "hi".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "bio": "hi" }));
}
