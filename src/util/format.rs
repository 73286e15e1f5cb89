//! Timestamp parsing and display formatting.
//!
//! Backend timestamps are RFC 3339 strings. They are shown in the offset the
//! backend sent; anything unparsable is shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day], [year], [hour repr:12]:[minute] [period]");
const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day], [year], [hour repr:12]:[minute] [period]");

pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// `Mar 01, 2024, 10:05 AM`
pub fn format_short_date(raw: &str) -> String {
    format_with(raw, SHORT_DATE)
}

/// `March 01, 2024, 10:05 AM`
pub fn format_long_date(raw: &str) -> String {
    format_with(raw, LONG_DATE)
}

fn format_with(raw: &str, description: &[BorrowedFormatItem<'_>]) -> String {
    parse_timestamp(raw)
        .and_then(|ts| ts.format(description).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// First `n` characters of `value`.
pub fn prefix_chars(value: &str, n: usize) -> &str {
    value.char_indices().nth(n).map_or(value, |(idx, _)| &value[..idx])
}

/// Single-line preview: whitespace collapsed, cut at `max_chars` with an ellipsis.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = prefix_chars(&flat, max_chars);
    if cut.len() == flat.len() { flat } else { format!("{}…", cut.trim_end()) }
}
