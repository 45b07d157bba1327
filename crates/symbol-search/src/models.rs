//! Search results as handed over by a symbol catalog.

use derive_more::From;
use serde::{Deserialize, Serialize};

/// One matched catalog entry.
///
/// The catalog owns what the entry means; the client only needs the stable
/// `key` and enough text to label the entry in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResultItem {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub symbol_class: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResultItem {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            symbol_class: String::new(),
            category: String::new(),
            tags: Vec::new(),
        }
    }

    /// Single-line label used by list views
    pub fn label(&self) -> String {
        if self.category.is_empty() {
            format!("{} [{}]", self.name, self.key)
        } else {
            format!("{} [{}] ({})", self.name, self.key, self.category)
        }
    }
}

/// Everything one search returned, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, From)]
pub struct ResultSet {
    items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ResultItem> {
        self.items
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
