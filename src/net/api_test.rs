use super::*;
use crate::net::gateway::Method;

fn draft() -> ArticleDraft {
    ArticleDraft { title: "Lifetimes".to_owned(), content: "x".repeat(60) }
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn article_endpoints_format_expected_paths() {
    assert_eq!(article_endpoint("a1"), "/articles/a1");
    assert_eq!(article_history_endpoint("a1"), "/articles/a1/history");
    assert_eq!(article_summary_endpoint("a1"), "/articles/a1/summary");
}

// =============================================================
// Contract table: verb, path, session flag
// =============================================================

#[test]
fn auth_requests_do_not_require_session() {
    let sign_up = sign_up_request(&SignUpRequest::default()).unwrap();
    let sign_in = sign_in_request(&SignInRequest::default()).unwrap();

    assert_eq!((sign_up.method, sign_up.path.as_str()), (Method::Post, "/auth/signup"));
    assert_eq!((sign_in.method, sign_in.path.as_str()), (Method::Post, "/auth/login"));
    assert!(!sign_up.requires_session);
    assert!(!sign_in.requires_session);
}

#[test]
fn read_requests_require_session() {
    let cases = [
        (list_articles_request(), "/articles"),
        (get_article_request("a1"), "/articles/a1"),
        (history_request("a1"), "/articles/a1/history"),
        (summary_request("a1"), "/articles/a1/summary"),
    ];
    for (request, path) in cases {
        assert_eq!(request.method, Method::Get, "{path}");
        assert_eq!(request.path, path);
        assert!(request.requires_session, "{path}");
        assert!(request.payload.is_none(), "{path}");
    }
}

#[test]
fn mutations_require_session_too() {
    let create = create_article_request(&draft()).unwrap();
    let update = update_article_request("a1", &draft()).unwrap();
    let delete = delete_article_request("a1");

    assert_eq!((create.method, create.path.as_str()), (Method::Post, "/articles"));
    assert_eq!((update.method, update.path.as_str()), (Method::Patch, "/articles/a1"));
    assert_eq!((delete.method, delete.path.as_str()), (Method::Delete, "/articles/a1"));
    assert!(create.requires_session && update.requires_session && delete.requires_session);
}

#[test]
fn draft_payload_is_title_and_content() {
    let update = update_article_request("a1", &draft()).unwrap();
    let payload = update.payload.unwrap();
    assert_eq!(payload["title"], "Lifetimes");
    assert_eq!(payload["content"].as_str().map(str::len), Some(60));
}

// =============================================================
// Article lookups
// =============================================================

#[test]
fn empty_article_bodies_mean_not_found() {
    assert_eq!(article_or_none(Value::Null), Ok(None));
    assert_eq!(article_or_none(serde_json::json!({})), Ok(None));
}

#[test]
fn article_body_decodes() {
    let article = article_or_none(serde_json::json!({ "id": "a1", "title": "T" })).unwrap().unwrap();
    assert_eq!(article.id, "a1");
}

#[test]
fn malformed_article_body_is_an_error() {
    assert!(article_or_none(serde_json::json!([1, 2])).is_err());
}
