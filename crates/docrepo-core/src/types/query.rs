//! Store queries: the conditions a repository hands to a [`Store`].
//!
//! [`Store`]: crate::traits::Store

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, values_equal};
use super::filter::{FilterField, FilterOp};

/// A query over one collection.
///
/// A document matches when it satisfies every `all_of` condition and, if
/// `any_of` is non-empty, at least one `any_of` condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreQuery {
    /// Conditions that must all hold.
    pub all_of: Vec<FilterField>,
    /// Alternatives of which one must hold. Empty means unconstrained.
    pub any_of: Vec<FilterField>,
}

impl StoreQuery {
    /// Create a query that matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required condition.
    pub fn must(mut self, condition: FilterField) -> Self {
        self.all_of.push(condition);
        self
    }

    /// Add an alternative condition.
    pub fn should(mut self, condition: FilterField) -> Self {
        self.any_of.push(condition);
        self
    }

    /// Evaluate the query against a document.
    pub fn matches(&self, document: &Document) -> bool {
        self.all_of
            .iter()
            .all(|condition| condition_matches(condition, document))
            && (self.any_of.is_empty()
                || self
                    .any_of
                    .iter()
                    .any(|condition| condition_matches(condition, document)))
    }
}

fn condition_matches(condition: &FilterField, document: &Document) -> bool {
    let actual = document.get(&condition.field);
    match condition.op {
        FilterOp::Eq => actual.is_some_and(|value| values_equal(value, &condition.value)),
        FilterOp::ILike => {
            let (Some(haystack), Some(needle)) = (actual.and_then(text_form), text_form(&condition.value))
            else {
                return false;
            };
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
    }
}

/// Text form used for substring matching; containers and null have none.
fn text_form(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
