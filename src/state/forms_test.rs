use super::*;

fn status(code: u16, body: &str) -> ApiError {
    ApiError::from_status(code, body)
}

// =============================================================
// Login classification
// =============================================================

#[test]
fn login_unauthorized_shows_credentials_message() {
    let err = status(401, r#"{"error": "Invalid credentials", "details": {}}"#);
    let errors = classify_login_error(&err);
    assert_eq!(errors.general.as_deref(), Some("Неверное имя пользователя или пароль"));
    assert!(errors.field("username").is_none());
}

#[test]
fn login_validation_details_map_to_fields() {
    let err = status(400, r#"{"error": "Validation error", "details": {"username": ["This field is required."]}}"#);
    let errors = classify_login_error(&err);
    assert_eq!(errors.field("username"), Some("This field is required."));
    assert!(errors.general.is_none());
}

#[test]
fn login_generic_error_becomes_banner() {
    let errors = classify_login_error(&status(500, r#"{"error": "Server exploded"}"#));
    assert_eq!(errors, FormErrors::general("Server exploded"));
}

#[test]
fn login_without_body_falls_back() {
    let errors = classify_login_error(&ApiError::Network("offline".to_owned()));
    assert_eq!(errors.general.as_deref(), Some(LOGIN_FAILED));
}

// =============================================================
// Register classification
// =============================================================

#[test]
fn register_password_mismatch_shows_first_message_on_field() {
    let body = r#"{"error": "Validation error", "details": {"password_confirm": ["Passwords do not match", "ignored"]}}"#;
    let errors = classify_register_error(&status(400, body));
    assert_eq!(errors.field("password_confirm"), Some("Passwords do not match"));
    assert!(errors.field("password").is_none());
    assert!(errors.general.is_none());
}

#[test]
fn register_non_field_errors_become_banner() {
    let body = r#"{"details": {"non_field_errors": ["Something is off"]}}"#;
    let errors = classify_register_error(&status(400, body));
    assert_eq!(errors.general.as_deref(), Some("Something is off"));
}

#[test]
fn register_empty_details_use_error_message() {
    let body = r#"{"error": "Validation error", "details": {"email": []}}"#;
    let errors = classify_register_error(&status(400, body));
    assert_eq!(errors, FormErrors::general("Validation error"));
}

#[test]
fn register_unparseable_body_falls_back() {
    let errors = classify_register_error(&status(502, "<html/>"));
    assert_eq!(errors.general.as_deref(), Some(REGISTER_FAILED));
}

#[test]
fn action_message_prefers_server_text() {
    assert_eq!(action_message(&status(403, r#"{"error": "Forbidden"}"#), "fallback"), "Forbidden");
    assert_eq!(action_message(&status(500, ""), "fallback"), "fallback");
}

#[test]
fn unauthorized_failures_route_to_login() {
    assert_eq!(respond_to_failure(&status(401, ""), "x"), FailureResponse::Login);
    assert_eq!(
        respond_to_failure(&status(400, r#"{"error": "Too long"}"#), "x"),
        FailureResponse::Show("Too long".to_owned())
    );
    assert_eq!(
        respond_to_failure(&ApiError::Network("offline".to_owned()), "Ошибка"),
        FailureResponse::Show("Ошибка".to_owned())
    );
}

// =============================================================
// FormErrors
// =============================================================

#[test]
fn clear_field_removes_only_that_field() {
    let mut errors = FormErrors::default();
    errors.set_field("username", "bad");
    errors.set_field("password", "bad");
    errors.clear_field("username");
    assert!(errors.field("username").is_none());
    assert_eq!(errors.field("password"), Some("bad"));
    assert!(!errors.is_empty());
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn login_form_requires_both_fields() {
    let form = LoginForm { username: "  ".to_owned(), password: String::new() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.field("username"), Some(FIELD_REQUIRED));
    assert_eq!(errors.field("password"), Some(FIELD_REQUIRED));
}

#[test]
fn login_form_trims_username_only() {
    let form = LoginForm { username: " anna ".to_owned(), password: " pw ".to_owned() };
    let req = form.validate().unwrap();
    assert_eq!(req.username, "anna");
    assert_eq!(req.password, " pw ");
}

#[test]
fn register_form_flags_each_missing_field() {
    let form = RegisterForm { username: "anna".to_owned(), ..RegisterForm::default() };
    let errors = form.validate().unwrap_err();
    assert!(errors.field("username").is_none());
    assert_eq!(errors.field("email"), Some(FIELD_REQUIRED));
    assert_eq!(errors.field("password"), Some(FIELD_REQUIRED));
    assert_eq!(errors.field("password_confirm"), Some(FIELD_REQUIRED));
}

#[test]
fn register_form_leaves_mismatch_to_backend() {
    let form = RegisterForm {
        username: "anna".to_owned(),
        email: "a@b.ru".to_owned(),
        password: "secret123".to_owned(),
        password_confirm: "secret124".to_owned(),
    };
    assert_eq!(form.validate().unwrap().password_confirm, "secret124");
}

#[test]
fn post_content_rules() {
    assert_eq!(validate_post_content("   \n"), Err(POST_EMPTY));
    assert_eq!(validate_post_content("hello"), Ok("hello".to_owned()));
    assert_eq!(validate_post_content(&"я".repeat(5000)).map(|s| char_count(&s)), Ok(5000));
    assert_eq!(validate_post_content(&"я".repeat(5001)), Err(POST_TOO_LONG));
}

#[test]
fn comment_content_rules() {
    assert_eq!(validate_comment_content(""), Err(COMMENT_EMPTY));
    assert_eq!(validate_comment_content(&"a".repeat(2001)), Err(COMMENT_TOO_LONG));
    assert!(validate_comment_content("nice").is_ok());
}

#[test]
fn bio_may_be_empty_but_not_too_long() {
    assert_eq!(validate_bio(""), Ok(String::new()));
    assert_eq!(validate_bio(&"b".repeat(501)), Err(BIO_TOO_LONG));
}
