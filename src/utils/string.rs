/// String utility functions

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Remove every run of whitespace, including whitespace inside the text
pub fn strip_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Case-fold and strip whitespace so names and patterns compare loosely
///
/// `" Shark meat "` and `"SHARKMEAT"` both normalize to `"sharkmeat"`.
pub fn normalize_name(text: &str) -> String {
    strip_whitespace(&text.to_lowercase())
}
