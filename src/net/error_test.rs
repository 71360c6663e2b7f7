use super::*;

#[test]
fn from_status_keeps_structured_body() {
    let err = ApiError::from_status(400, r#"{"error": "Validation error", "details": {"email": ["taken"]}}"#);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.server_message(), Some("Validation error"));
    assert_eq!(err.body().unwrap().details["email"].first(), Some("taken"));
}

#[test]
fn from_status_drops_unparseable_body() {
    let err = ApiError::from_status(502, "<html>Bad gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, body: None });
    assert!(err.server_message().is_none());
}

#[test]
fn status_predicates() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(404, "").is_not_found());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
    assert_eq!(ApiError::Decode("bad".to_owned()).status(), None);
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::from_status(500, "").to_string(), "request failed: 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
