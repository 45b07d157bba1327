//! File-backed stand-in for the symbol dictionary service.
//!
//! Reads a JSON array of [`ResultItem`] entries and answers searches with a
//! plain field comparison. Real dictionaries plug in through the same
//! [`SymbolCatalog`] trait.

use async_trait::async_trait;
use std::path::PathBuf;
use symbol_search::{CatalogError, ResultItem, ResultSet, SearchField, SearchRequest, SymbolCatalog};
use tokio::sync::OnceCell;
use tracing::info;

pub struct JsonCatalog {
    path: PathBuf,
    entries: OnceCell<Vec<ResultItem>>,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    /// Catalog that is loaded from the start
    #[cfg(test)]
    pub fn from_entries(entries: Vec<ResultItem>) -> Self {
        Self {
            path: PathBuf::new(),
            entries: OnceCell::new_with(Some(entries)),
        }
    }

    pub fn len(&self) -> Option<usize> {
        self.entries.get().map(Vec::len)
    }

    async fn read_entries(&self) -> Result<Vec<ResultItem>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Load(format!("{}: {e}", self.path.display())))?;
        let entries: Vec<ResultItem> = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Load(format!("{}: {e}", self.path.display())))?;
        info!(path = %self.path.display(), entries = entries.len(), "loaded symbol catalog");
        Ok(entries)
    }
}

#[async_trait]
impl SymbolCatalog for JsonCatalog {
    async fn load(&self) -> Result<(), CatalogError> {
        self.entries
            .get_or_try_init(|| self.read_entries())
            .await
            .map(|_| ())
    }

    async fn search(&self, request: &SearchRequest) -> Result<ResultSet, CatalogError> {
        let entries = self.entries.get().ok_or(CatalogError::NotLoaded)?;
        Ok(entries
            .iter()
            .filter(|entry| matches(entry, request))
            .cloned()
            .collect())
    }
}

fn matches(entry: &ResultItem, request: &SearchRequest) -> bool {
    request.constraints().all(|(field, accepted)| {
        accepted
            .iter()
            .any(|value| field_matches(entry, field, &value.to_lowercase()))
    })
}

fn field_matches(entry: &ResultItem, field: SearchField, value: &str) -> bool {
    let same = |text: &str| text.to_lowercase() == value;
    match field {
        SearchField::Name => entry.name.to_lowercase().contains(value),
        SearchField::Tag => entry.tags.iter().any(|tag| same(tag)),
        SearchField::SymbolClass => same(&entry.symbol_class),
        SearchField::Category => same(&entry.category),
        SearchField::Key => same(&entry.key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use symbol_search::{QueryBuilder, QueryFields};

    fn entry(key: &str, name: &str, class: &str, category: &str, tags: &[&str]) -> ResultItem {
        ResultItem {
            key: key.into(),
            name: name.into(),
            symbol_class: class.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<ResultItem> {
        vec![
            entry("10011500", "Tank", "Armour", "Land Equipment", &["Tracked", "Armour"]),
            entry("10011600", "Tank Recovery Vehicle", "Armour", "Land Equipment", &["Tracked"]),
            entry("30011100", "Frigate", "Surface Combatant", "Sea Surface", &["Naval"]),
            entry("25212000", "Minefield", "Obstacle", "Control Measure", &[]),
        ]
    }

    fn keys(set: &ResultSet) -> Vec<&str> {
        set.items().iter().map(|item| item.key.as_str()).collect()
    }

    #[rstest]
    #[case(QueryFields::default(), vec!["10011500", "10011600", "30011100", "25212000"])]
    #[case(QueryFields::default().with(SearchField::Name, "tank"), vec!["10011500", "10011600"])]
    #[case(QueryFields::default().with(SearchField::Tag, "naval"), vec!["30011100"])]
    #[case(QueryFields::default().with(SearchField::SymbolClass, "armour"), vec!["10011500", "10011600"])]
    #[case(QueryFields::default().with(SearchField::Category, "Control Measure"), vec!["25212000"])]
    #[case(QueryFields::default().with(SearchField::Key, "10011600"), vec!["10011600"])]
    #[case(
        QueryFields::default().with(SearchField::Name, "tank").with(SearchField::Tag, "armour"),
        vec!["10011500"]
    )]
    #[case(QueryFields::default().with(SearchField::Name, "submarine"), vec![])]
    #[tokio::test]
    async fn test_search(#[case] fields: QueryFields, #[case] expected: Vec<&str>) {
        let catalog = JsonCatalog::from_entries(sample());
        let request = QueryBuilder::new().build(&fields);

        let results = catalog.search(&request).await.unwrap();
        assert_eq!(keys(&results), expected);
        assert_eq!(results.total_count(), expected.len());
    }

    #[tokio::test]
    async fn test_any_accepted_value_matches() {
        let catalog = JsonCatalog::from_entries(sample());
        let request: SearchRequest = [
            (SearchField::Key, "25212000".to_string()),
            (SearchField::Key, "30011100".to_string()),
        ]
        .into_iter()
        .collect();

        let results = catalog.search(&request).await.unwrap();
        assert_eq!(keys(&results), vec!["30011100", "25212000"]);
    }

    #[tokio::test]
    async fn test_search_before_load() {
        let catalog = JsonCatalog::new("/nonexistent/catalog.json");
        let err = catalog.search(&SearchRequest::unconstrained()).await.unwrap_err();
        assert_eq!(err, CatalogError::NotLoaded);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();

        let catalog = JsonCatalog::new(&path);
        assert_eq!(catalog.len(), None);
        catalog.load().await.unwrap();
        assert_eq!(catalog.len(), Some(4));

        // Loading twice keeps the first read
        catalog.load().await.unwrap();
        let results = catalog.search(&SearchRequest::unconstrained()).await.unwrap();
        assert_eq!(results.total_count(), 4);
    }

    #[tokio::test]
    async fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = JsonCatalog::new(dir.path().join("missing.json"));
        assert!(matches!(missing.load().await, Err(CatalogError::Load(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = JsonCatalog::new(&path);
        assert!(matches!(broken.load().await, Err(CatalogError::Load(_))));
        assert_eq!(broken.len(), None);
    }
}
