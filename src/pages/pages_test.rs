use super::*;
use crate::net::types::Author;

fn article() -> Article {
    Article {
        id: "a1".to_owned(),
        title: "Borrowing".to_owned(),
        content: "Shared or exclusive".to_owned(),
        author: Author { id: "u1".to_owned(), name: "Ada".to_owned() },
        created_by: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: None,
        summary: None,
    }
}

// =============================================================
// Article lookup
// =============================================================

#[test]
fn lookup_found_and_missing() {
    assert_eq!(article_lookup(Ok(Some(article()))), ArticleLookup::Found(article()));
    assert_eq!(article_lookup(Ok(None)), ArticleLookup::Missing);
}

#[test]
fn lookup_treats_404_as_missing() {
    let err = ApiError::Status { status: 404, message: "Article not found".to_owned() };
    assert_eq!(article_lookup(Err(err)), ArticleLookup::Missing);
}

#[test]
fn lookup_keeps_other_failures() {
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    assert_eq!(article_lookup(Err(err.clone())), ArticleLookup::Failed(err));
}

// =============================================================
// Auth failure text
// =============================================================

#[test]
fn auth_failure_prefers_normalized_message() {
    let err = ApiError::Status { status: 400, message: "Email already registered".to_owned() };
    assert_eq!(auth_failure_text(&err, "Signup failed"), "Email already registered");
}

#[test]
fn auth_failure_falls_back_on_blank_message() {
    let err = ApiError::Transport { message: "  ".to_owned() };
    assert_eq!(auth_failure_text(&err, "Signin failed"), "Signin failed");
}
