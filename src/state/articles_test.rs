use super::*;
use crate::net::types::Author;

fn article(id: &str, title: &str, author: &str, created_at: &str) -> Article {
    Article {
        id: id.to_owned(),
        title: title.to_owned(),
        content: format!("Body of {title}"),
        author: Author { id: format!("{author}-id"), name: author.to_owned() },
        created_by: None,
        created_at: created_at.to_owned(),
        updated_at: None,
        summary: None,
    }
}

fn revision(id: &str, created_at: &str) -> ArticleRevision {
    ArticleRevision {
        id: id.to_owned(),
        article_id: "a1".to_owned(),
        title: "T".to_owned(),
        content: "C".to_owned(),
        created_at: created_at.to_owned(),
        version: 1,
    }
}

fn many(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| article(&format!("a{i}"), &format!("Article {i}"), "Ada", &format!("2024-01-01T00:{:02}:00Z", i % 60)))
        .collect()
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_title_content_and_author_case_insensitively() {
    let a = article("a1", "Ownership Basics", "Grace", "2024-01-01T00:00:00Z");
    assert!(matches_search(&a, "ownership"));
    assert!(matches_search(&a, "BODY OF"));
    assert!(matches_search(&a, "grace"));
    assert!(!matches_search(&a, "lifetimes"));
    assert!(matches_search(&a, "  "));
}

#[test]
fn set_search_resets_to_first_page() {
    let mut state = ArticleListState::default();
    state.replace_items(many(25));
    state.next_page();
    state.set_search("Article 1".to_owned());
    assert_eq!(state.page, 0);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn newest_first_by_default_and_toggle_reverses() {
    let mut state = ArticleListState::default();
    state.replace_items(vec![
        article("old", "Old", "Ada", "2023-01-01T00:00:00Z"),
        article("new", "New", "Ada", "2024-06-01T00:00:00Z"),
        article("mid", "Mid", "Ada", "2024-01-01T00:00:00Z"),
    ]);
    let ids: Vec<_> = state.filtered().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, ["new", "mid", "old"]);

    state.toggle_sort();
    let ids: Vec<_> = state.filtered().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, ["old", "mid", "new"]);
}

#[test]
fn unparsable_dates_sort_before_real_ones() {
    assert_eq!(compare_created("garbage", "2024-01-01T00:00:00Z"), Ordering::Less);
    assert_eq!(compare_created("2024-01-01T00:00:00Z", ""), Ordering::Greater);
}

#[test]
fn revisions_sort_newest_first() {
    let mut revisions = vec![
        revision("r1", "2024-01-01T00:00:00Z"),
        revision("r3", "2024-03-01T00:00:00Z"),
        revision("r2", "2024-02-01T00:00:00Z"),
    ];
    sort_revisions(&mut revisions);
    let ids: Vec<_> = revisions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r3", "r2", "r1"]);
}

// =============================================================
// Paging
// =============================================================

#[test]
fn pages_and_range_labels() {
    let mut state = ArticleListState::default();
    state.replace_items(many(25));
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.visible().len(), 10);
    assert_eq!(state.range_label(), "1-10 of 25 articles");

    state.next_page();
    state.next_page();
    assert_eq!(state.visible().len(), 5);
    assert_eq!(state.range_label(), "21-25 of 25 articles");

    state.next_page();
    assert_eq!(state.page, 2);
    state.prev_page();
    assert_eq!(state.page, 1);
}

#[test]
fn empty_list_has_one_page() {
    let state = ArticleListState::default();
    assert_eq!(state.page_count(), 1);
    assert_eq!(state.range_label(), "0 articles");
    assert!(state.visible().is_empty());
}

#[test]
fn only_known_page_sizes_are_accepted() {
    let mut state = ArticleListState::default();
    state.set_page_size(20);
    assert_eq!(state.page_size, 20);
    state.set_page_size(7);
    assert_eq!(state.page_size, 20);
}

#[test]
fn shrinking_list_clamps_page() {
    let mut state = ArticleListState::default();
    state.replace_items(many(25));
    state.next_page();
    state.next_page();
    state.replace_items(many(5));
    assert_eq!(state.page, 0);
}
