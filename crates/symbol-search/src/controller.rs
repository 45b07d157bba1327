//! Search controller.
//!
//! Searches run on the tokio runtime and report back through a channel; the
//! controller is the only owner of the [`ResultPager`], so every pager
//! mutation happens on whichever task holds the controller. Each dispatched
//! search carries a generation number and only the completion of the most
//! recently issued search is allowed to touch the pager.

use crate::catalog::{CatalogError, SymbolCatalog};
use crate::models::ResultSet;
use crate::pager::{Page, PagerState, ResultPager};
use crate::query::{QueryBuilder, QueryFields, SearchRequest};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Handle for one dispatched search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Message sent by a finished search task.
#[derive(Debug)]
pub struct SearchCompletion {
    generation: u64,
    outcome: Result<ResultSet, CatalogError>,
}

impl SearchCompletion {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What applying a completion did to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Results replaced the pager contents and the first page was drawn
    Loaded { total: usize, state: PagerState },
    /// The search failed; the pager kept its previous contents
    Failed(CatalogError),
    /// A newer search had been issued; the completion was dropped
    Stale { generation: u64 },
}

pub struct SearchController<C> {
    catalog: Arc<C>,
    builder: QueryBuilder,
    pager: ResultPager,

    /// Generation of the most recently issued search (or clear)
    generation: u64,
    pending: Option<u64>,
    last_error: Option<CatalogError>,

    tx_completion: mpsc::UnboundedSender<SearchCompletion>,
    rx_completion: mpsc::UnboundedReceiver<SearchCompletion>,
}

impl<C: SymbolCatalog> SearchController<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_pager(catalog, ResultPager::default())
    }

    pub fn with_page_size(catalog: Arc<C>, page_size: NonZeroUsize) -> Self {
        Self::with_pager(catalog, ResultPager::with_page_size(page_size))
    }

    fn with_pager(catalog: Arc<C>, pager: ResultPager) -> Self {
        let (tx_completion, rx_completion) = mpsc::unbounded_channel();
        Self {
            catalog,
            builder: QueryBuilder::new(),
            pager,
            generation: 0,
            pending: None,
            last_error: None,
            tx_completion,
            rx_completion,
        }
    }

    pub async fn load_catalog(&self) -> Result<(), CatalogError> {
        self.catalog.load().await
    }

    /// Build a request from raw field text and dispatch it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn search(&mut self, fields: &QueryFields) -> SearchTicket {
        let request = self.builder.build(fields);
        self.dispatch(request)
    }

    pub fn dispatch(&mut self, request: SearchRequest) -> SearchTicket {
        self.generation += 1;
        let generation = self.generation;
        self.pending = Some(generation);
        info!(generation, %request, "dispatching symbol search");

        let catalog = self.catalog.clone();
        let search = tokio::spawn(async move { catalog.search(&request).await });

        let tx_completion = self.tx_completion.clone();
        tokio::spawn(async move {
            let outcome = match search.await {
                Ok(outcome) => outcome,
                Err(e) => Err(CatalogError::Aborted(e.to_string())),
            };
            // The receiver lives as long as the controller
            let _ = tx_completion.send(SearchCompletion {
                generation,
                outcome,
            });
        });

        SearchTicket { generation }
    }

    pub fn apply(&mut self, completion: SearchCompletion) -> CompletionOutcome {
        let SearchCompletion {
            generation,
            outcome,
        } = completion;

        if generation != self.generation {
            warn!(
                generation,
                latest = self.generation,
                "dropping stale search completion"
            );
            return CompletionOutcome::Stale { generation };
        }
        self.pending = None;

        match outcome {
            Ok(results) => {
                self.last_error = None;
                let total = results.total_count();
                let state = self.pager.load(results).state;
                info!(generation, total, %state, "search completed");
                CompletionOutcome::Loaded { total, state }
            }
            Err(e) => {
                error!(generation, "search failed: {e}");
                self.last_error = Some(e.clone());
                CompletionOutcome::Failed(e)
            }
        }
    }

    /// Apply every completion that has already arrived, without waiting.
    pub fn pump(&mut self) -> Vec<CompletionOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.rx_completion.try_recv() {
            outcomes.push(self.apply(completion));
        }
        outcomes
    }

    /// Wait for the next completion, stale or not, and apply it.
    pub async fn next_completion(&mut self) -> Option<CompletionOutcome> {
        let completion = self.rx_completion.recv().await?;
        Some(self.apply(completion))
    }

    /// Wait until the latest search has been applied. Returns `None` when no
    /// search is in flight.
    pub async fn settle(&mut self) -> Option<CompletionOutcome> {
        while self.pending.is_some() {
            match self.next_completion().await? {
                CompletionOutcome::Stale { .. } => continue,
                outcome => return Some(outcome),
            }
        }
        None
    }

    pub fn next_page(&mut self) -> Page<'_> {
        self.pager.next_page()
    }

    /// Drop the current results and forget any search still in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.last_error = None;
        self.pager.clear();
        info!(generation = self.generation, "cleared search results");
    }

    pub fn pager(&self) -> &ResultPager {
        &self.pager
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
