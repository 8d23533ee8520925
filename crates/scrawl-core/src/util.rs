//! Shared utility functions used across multiple modules.

use std::sync::OnceLock;

use regex::Regex;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid regex"))
}

/// Escape HTML special characters so plain text can be embedded in markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reduce rich-text (HTML) content to a single line of plain text.
///
/// Tags become word breaks, the common entities are decoded and runs of
/// whitespace collapse to a single space.
pub fn strip_html(html: &str) -> String {
    let without_tags = tag_pattern().replace_all(html, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate text to `max_chars` characters, marking the cut with `...`.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let take_len = max_chars.saturating_sub(3);
    let mut truncated = text.chars().take(take_len).collect::<String>();
    truncated.push_str("...");
    truncated
}

/// Current Unix timestamp in milliseconds.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
