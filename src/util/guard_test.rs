use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn public_routes_are_sign_in_and_sign_up() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/signup"), RouteClass::Public);
    assert_eq!(classify("/signup/"), RouteClass::Public);
}

#[test]
fn everything_under_articles_is_protected() {
    for path in [
        "/articles",
        "/articles/",
        "/articles/new",
        "/articles/42",
        "/articles/42/edit",
        "/articles/42/history",
    ] {
        assert_eq!(classify(path), RouteClass::Protected, "{path}");
    }
}

#[test]
fn lookalike_prefix_is_not_protected() {
    assert_eq!(classify("/articlesarchive"), RouteClass::Unclassified);
}

#[test]
fn unknown_routes_are_unclassified() {
    assert_eq!(classify("/about"), RouteClass::Unclassified);
    assert_eq!(classify("/signup/extra"), RouteClass::Unclassified);
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(classify("/articles?page=2"), RouteClass::Protected);
    assert_eq!(classify("/signup#form"), RouteClass::Public);
}

// =============================================================
// Redirect decisions
// =============================================================

#[test]
fn protected_paths_without_token_go_to_public_landing() {
    for path in ["/articles", "/articles/new", "/articles/1/history"] {
        assert_eq!(redirect_for(false, path), Some(PUBLIC_LANDING), "{path}");
    }
}

#[test]
fn public_paths_with_token_go_to_protected_landing() {
    for path in ["/", "/signup"] {
        assert_eq!(redirect_for(true, path), Some(PROTECTED_LANDING), "{path}");
    }
}

#[test]
fn allowed_combinations_do_not_redirect() {
    assert_eq!(redirect_for(true, "/articles/7"), None);
    assert_eq!(redirect_for(false, "/"), None);
    assert_eq!(redirect_for(false, "/signup"), None);
    assert_eq!(redirect_for(true, "/about"), None);
    assert_eq!(redirect_for(false, "/about"), None);
}
