//! Query parsing.
//!
//! A raw search string mixes free text with `key:value` filters:
//!
//! ```text
//! sol is:waypoint -trait:barren
//! ```
//!
//! Parsing never fails. Tokens that look like broken filters (`is:`, `:x`)
//! become inert filters that every evaluator skips.

use serde::Serialize;

/// Whether a filter selects or rejects matching candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    /// `key:value`
    Include,
    /// `-key:value`
    Exclude,
}

/// One `key:value` filter. The key is stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Filter {
    pub key: String,
    pub op: FilterOp,
    pub value: String,
}

impl Filter {
    pub fn include(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            op: FilterOp::Include,
            value: value.into(),
        }
    }

    pub fn exclude(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            op: FilterOp::Exclude,
            value: value.into(),
        }
    }

    /// Empty key or empty value
    pub fn is_inert(&self) -> bool {
        self.key.is_empty() || self.value.is_empty()
    }

    fn from_token(token: &str) -> Option<Self> {
        let (head, value) = token.split_once(':')?;
        Some(match head.strip_prefix('-') {
            Some(key) => Filter::exclude(key, value),
            None => Filter::include(head, value),
        })
    }
}

/// A search string split into free text and filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Free-text tokens joined by single spaces, case as typed
    pub text: String,
    /// Distinct filters in order of first appearance
    pub filters: Vec<Filter>,
}

impl ParsedQuery {
    pub fn parse(raw: &str) -> Self {
        let mut words: Vec<&str> = Vec::new();
        let mut filters: Vec<Filter> = Vec::new();

        for token in raw.split_whitespace() {
            match Filter::from_token(token) {
                Some(filter) => {
                    if !filters.contains(&filter) {
                        filters.push(filter);
                    }
                }
                None => words.push(token),
            }
        }

        Self {
            text: words.join(" "),
            filters,
        }
    }
}
