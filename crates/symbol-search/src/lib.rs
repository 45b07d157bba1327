//! Symbol dictionary search client.
//!
//! Builds multi-field queries against an external symbol catalog and serves
//! the (possibly very large) answer in fixed-size pages:
//! - [`QueryBuilder`] turns five optional text fields into a [`SearchRequest`]
//! - [`ResultPager`] windows one [`ResultSet`] into [`Page`]s
//! - [`SearchController`] runs searches in the background and makes sure only
//!   the latest one reaches the pager

pub mod catalog;
pub mod controller;
pub mod models;
pub mod pager;
pub mod query;

pub use catalog::{CatalogError, SymbolCatalog};
pub use controller::{CompletionOutcome, SearchCompletion, SearchController, SearchTicket};
pub use models::{ResultItem, ResultSet};
pub use pager::{DEFAULT_PAGE_SIZE, PAGE_SIZE, Page, PagerState, ResultPager};
pub use query::{QueryBuilder, QueryFields, SearchField, SearchRequest};
