use super::*;
use serde_json::json;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(create_endpoint("/api", EntityKind::Gang), "/api/gang/create/");
    assert_eq!(update_endpoint("/api", EntityKind::Member, "7"), "/api/member/7/update/");
    assert_eq!(delete_endpoint("/api", EntityKind::Relationship, "9"), "/api/relationship/9/delete/");
    assert_eq!(record_endpoint("/api", EntityKind::Case, "3"), "/api/case/3/");
}

#[test]
fn endpoints_respect_configured_base() {
    assert_eq!(create_endpoint("/intel/api", EntityKind::Incident), "/intel/api/incident/create/");
}

#[test]
fn success_status_returns_body() {
    let body = json!({ "success": true, "id": 5 });
    assert_eq!(interpret_response(200, Ok(body.clone())), Ok(body));
}

#[test]
fn success_status_with_unparsable_body_is_parse_error() {
    let result = interpret_response(200, Err("expected value at line 1".to_owned()));
    assert_eq!(result, Err(RequestError::Parse("expected value at line 1".to_owned())));
}

#[test]
fn failure_status_uses_backend_error_message() {
    let result = interpret_response(403, Ok(json!({ "error": "Edit mode not enabled" })));
    assert_eq!(
        result,
        Err(RequestError::Status { status: 403, message: "Edit mode not enabled".to_owned() })
    );
}

#[test]
fn failure_status_without_error_field_uses_fallback() {
    let result = interpret_response(500, Err("html error page".to_owned()));
    assert_eq!(result, Err(RequestError::Status { status: 500, message: FALLBACK_ERROR.to_owned() }));

    let result = interpret_response(404, Ok(json!({ "detail": "missing" })));
    assert_eq!(result, Err(RequestError::Status { status: 404, message: FALLBACK_ERROR.to_owned() }));
}

#[test]
fn failure_status_is_failure_even_with_success_body() {
    let result = interpret_response(400, Ok(json!({ "success": true })));
    assert!(matches!(result, Err(RequestError::Status { status: 400, .. })));
}

#[test]
fn status_error_displays_backend_message_only() {
    let err = RequestError::Status { status: 400, message: "UNIQUE constraint failed".to_owned() };
    assert_eq!(err.to_string(), "UNIQUE constraint failed");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_backend_is_unavailable_outside_browser() {
    let backend = HttpBackend::new(ClientConfig::default());
    let request = ApiRequest {
        method: Method::Post,
        url: create_endpoint(&backend.config().api_base, EntityKind::Gang),
        body: RequestBody::Json(json!({})),
    };
    let result = futures::executor::block_on(backend.send(request));
    assert_eq!(result, Err(RequestError::Unavailable));
}

#[test]
fn message_prefers_backend_text() {
    let err = RequestError::Status { status: 403, message: "Edit mode not enabled".to_owned() };
    assert_eq!(err.message(), "Edit mode not enabled");
    assert_eq!(RequestError::Transport("offline".to_owned()).message(), "network error: offline");
}
