//! Multi-field symbol queries.
//!
//! A [`SearchRequest`] is built fresh for every search from the five raw text
//! inputs held in [`QueryFields`]. Empty inputs leave their field
//! unconstrained, everything else is passed to the catalog verbatim.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// One of the independently filterable query dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchField {
    Name,
    Tag,
    #[strum(to_string = "class", serialize = "symbol-class")]
    SymbolClass,
    Category,
    Key,
}

/// Raw, possibly empty text for every [`SearchField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFields {
    pub name: String,
    pub tag: String,
    pub symbol_class: String,
    pub category: String,
    pub key: String,
}

impl QueryFields {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::Tag => &self.tag,
            SearchField::SymbolClass => &self.symbol_class,
            SearchField::Category => &self.category,
            SearchField::Key => &self.key,
        }
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style variant of [`QueryFields::set`]
    pub fn with(mut self, field: SearchField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    /// Fields in declaration order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (SearchField, &str)> {
        SearchField::iter().map(move |field| (field, self.get(field)))
    }

    fn slot_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::Name => &mut self.name,
            SearchField::Tag => &mut self.tag,
            SearchField::SymbolClass => &mut self.symbol_class,
            SearchField::Category => &mut self.category,
            SearchField::Key => &mut self.key,
        }
    }
}

/// Accepted values per constrained field. A field without an entry matches
/// anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    constraints: BTreeMap<SearchField, BTreeSet<String>>,
}

impl SearchRequest {
    /// A request that matches every catalog entry.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn accepted(&self, field: SearchField) -> Option<&BTreeSet<String>> {
        self.constraints.get(&field)
    }

    pub fn is_constrained(&self, field: SearchField) -> bool {
        self.constraints.contains_key(&field)
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraints(&self) -> impl Iterator<Item = (SearchField, &BTreeSet<String>)> {
        self.constraints.iter().map(|(field, values)| (*field, values))
    }
}

impl FromIterator<(SearchField, String)> for SearchRequest {
    fn from_iter<I: IntoIterator<Item = (SearchField, String)>>(iter: I) -> Self {
        let mut constraints: BTreeMap<SearchField, BTreeSet<String>> = BTreeMap::new();
        for (field, value) in iter {
            constraints.entry(field).or_default().insert(value);
        }
        Self { constraints }
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return write!(f, "<any>");
        }
        for (i, (field, values)) in self.constraints().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            write!(f, "{field}={}", joined.join("|"))?;
        }
        Ok(())
    }
}

/// Turns raw field text into a [`SearchRequest`]. Stateless, so one instance
/// can serve every search.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, fields: &QueryFields) -> SearchRequest {
        fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field, value.to_owned()))
            .collect()
    }
}
