use super::Command;
use crate::catalog::JsonCatalog;
use crate::config::Config;
use crate::error::{Result, WrapErr, bail, error};
use crate::view;
use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::Arc;
use symbol_search::{CompletionOutcome, QueryFields, SearchController, SymbolCatalog};
use tracing::info;

pub struct SearchCommand {
    config: Config,
    fields: QueryFields,
    /// `None` prints every page
    pages: Option<NonZeroUsize>,
}

impl SearchCommand {
    pub fn new(config: Config, fields: QueryFields, pages: Option<NonZeroUsize>) -> Self {
        Self {
            config,
            fields,
            pages,
        }
    }
}

/// Search once and print up to `pages` pages.
pub async fn run_search<C: SymbolCatalog>(
    controller: &mut SearchController<C>,
    fields: &QueryFields,
    pages: Option<NonZeroUsize>,
    timeout: std::time::Duration,
    out: &mut impl Write,
) -> Result<()> {
    controller.search(fields);
    let outcome = tokio::time::timeout(timeout, controller.settle())
        .await
        .map_err(|_| error!("search did not finish within {timeout:?}"))?;

    let total = match outcome {
        Some(CompletionOutcome::Loaded { total, .. }) => total,
        Some(CompletionOutcome::Failed(e)) => return Err(e).wrap_err("Symbol search failed"),
        Some(CompletionOutcome::Stale { .. }) | None => bail!("search was superseded"),
    };

    view::render_count(out, total)?;
    let page_size = controller.pager().page_size();
    view::render_page(out, &controller.pager().page(), total, page_size)?;

    let mut printed = 1;
    while controller.pager().has_more() && pages.is_none_or(|limit| printed < limit.get()) {
        let page = controller.next_page();
        view::render_page(out, &page, total, page_size)?;
        printed += 1;
    }
    Ok(())
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = Arc::new(JsonCatalog::new(&self.config.catalog_path));
        let mut controller = SearchController::with_page_size(catalog, self.config.page_size);
        controller
            .load_catalog()
            .await
            .wrap_err("Load symbol catalog error")?;
        info!(
            catalog = ?self.config.catalog_path,
            entries = controller.catalog().len(),
            "catalog ready"
        );

        let mut out = std::io::stdout();
        run_search(
            &mut controller,
            &self.fields,
            self.pages,
            self.config.search_timeout(),
            &mut out,
        )
        .await
    }
}
