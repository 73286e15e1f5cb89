//! Article list state: fetched items plus search, sort and paging.
//!
//! DESIGN
//! ======
//! Filtering and sorting run over the in-memory list only; the backend returns
//! every article in one response.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use std::cmp::Ordering;

use crate::net::types::{Article, ArticleRevision};
use crate::util::format::parse_timestamp;

pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::NewestFirst => Self::OldestFirst,
            Self::OldestFirst => Self::NewestFirst,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::NewestFirst => "↓",
            Self::OldestFirst => "↑",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleListState {
    pub items: Vec<Article>,
    pub loading: bool,
    pub search: String,
    pub sort: SortOrder,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ArticleListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search: String::new(),
            sort: SortOrder::default(),
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl ArticleListState {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZES.contains(&page_size) {
            self.page_size = page_size;
            self.page = 0;
        }
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    pub fn replace_items(&mut self, items: Vec<Article>) {
        self.items = items;
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }

    /// Items matching the search, sorted by creation time.
    pub fn filtered(&self) -> Vec<Article> {
        let mut matches: Vec<Article> =
            self.items.iter().filter(|a| matches_search(a, &self.search)).cloned().collect();
        matches.sort_by(|a, b| {
            let order = compare_created(&a.created_at, &b.created_at);
            match self.sort {
                SortOrder::NewestFirst => order.reverse(),
                SortOrder::OldestFirst => order,
            }
        });
        matches
    }

    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    /// The current page of filtered items.
    pub fn visible(&self) -> Vec<Article> {
        self.filtered().into_iter().skip(self.page * self.page_size).take(self.page_size).collect()
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// `1-10 of 42 articles`
    pub fn range_label(&self) -> String {
        let total = self.filtered().len();
        if total == 0 {
            return "0 articles".to_owned();
        }
        let start = self.page * self.page_size + 1;
        let end = (start + self.page_size - 1).min(total);
        format!("{start}-{end} of {total} articles")
    }
}

/// Case-insensitive match on title, content or author name.
pub fn matches_search(article: &Article, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [article.title.as_str(), article.content.as_str(), article.author.name.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Chronological order; unparsable timestamps sort before parsable ones and
/// among themselves lexically.
pub fn compare_created(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Revisions newest first.
pub fn sort_revisions(revisions: &mut [ArticleRevision]) {
    revisions.sort_by(|a, b| compare_created(&b.created_at, &a.created_at));
}
