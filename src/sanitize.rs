//! Free-text input sanitization.
//!
//! This is a denylist, not an HTML escaper: tags and stray angle brackets are
//! removed, everything else (including `&` and quotes) is passed through.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum length, in characters, of any sanitized field.
pub const MAX_FIELD_CHARS: usize = 1000;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Strip markup from `raw` and bound its length.
///
/// Steps, in order:
/// - remove every `<...>` tag
/// - remove any remaining `<` or `>`
/// - trim surrounding whitespace
/// - keep at most [`MAX_FIELD_CHARS`] characters
///
/// Whitespace uncovered by the truncation is trimmed too, which keeps
/// `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    let without_tags = tag_regex().replace_all(raw, "");
    let without_brackets: String = without_tags
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect();

    let trimmed = without_brackets.trim();
    match trimmed.char_indices().nth(MAX_FIELD_CHARS) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
