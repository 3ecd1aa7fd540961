/// Item name patterns
///
/// The user configures a single string of dot separated fragments, e.g.
/// `"rune.shark.prayer potion"`. Each fragment is matched as a loose,
/// case-insensitive substring of an item's display name.

use crate::utils::normalize_name;

/// Separator between fragments in the configured pattern string
pub const PATTERN_DELIMITER: char = '.';

/// Ordered, normalized pattern tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePatternList {
    tokens: Vec<String>,
}

impl NamePatternList {
    /// Split `raw` on the delimiter and normalize every token
    ///
    /// Blank tokens are kept so the list mirrors what the user typed; they are
    /// skipped at match time. An empty string yields one empty token.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split(PATTERN_DELIMITER).map(normalize_name).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens that can actually match, in configured order
    pub fn matchable(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn has_matchable(&self) -> bool {
        self.matchable().next().is_some()
    }

    /// First token contained in `normalized_name`
    ///
    /// `normalized_name` must already have gone through [`normalize_name`].
    pub fn first_match(&self, normalized_name: &str) -> Option<&str> {
        self.matchable().find(|token| normalized_name.contains(token))
    }
}
