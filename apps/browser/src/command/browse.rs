use super::Command;
use crate::catalog::JsonCatalog;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use crate::input::{self, Input};
use crate::view;
use std::io::Write;
use std::sync::Arc;
use symbol_search::{CompletionOutcome, QueryFields, SearchController, SymbolCatalog};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

pub struct BrowseCommand {
    config: Config,
}

impl BrowseCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive state: the five query fields plus the controller that owns
/// the results.
pub struct BrowserSession<C> {
    fields: QueryFields,
    controller: SearchController<C>,
}

impl<C: SymbolCatalog> BrowserSession<C> {
    pub fn new(controller: SearchController<C>) -> Self {
        Self {
            fields: QueryFields::default(),
            controller,
        }
    }

    pub fn handle_input(&mut self, input: Input, out: &mut impl Write) -> Result<Flow> {
        match input {
            Input::SetField(field, value) => {
                self.fields.set(field, value);
            }
            Input::Search(assignments) => {
                for (field, value) in assignments {
                    self.fields.set(field, value);
                }
                let ticket = self.controller.search(&self.fields);
                debug!(generation = ticket.generation(), "search issued");
                writeln!(out, "Searching...")?;
            }
            Input::Next => {
                // The advance control is only live while more results remain
                if self.controller.pager().has_more() {
                    let total = self.controller.pager().total_count();
                    let page_size = self.controller.pager().page_size();
                    let page = self.controller.next_page();
                    view::render_page(out, &page, total, page_size)?;
                } else {
                    writeln!(out, "No more results.")?;
                }
            }
            Input::Clear => {
                self.controller.clear();
                self.fields.clear();
                view::render_count(out, 0)?;
            }
            Input::Show => {
                view::render_fields(out, &self.fields)?;
                if self.controller.is_searching() {
                    writeln!(out, "(search in progress)")?;
                }
            }
            Input::Help => writeln!(out, "{}", input::HELP)?,
            Input::Quit => return Ok(Flow::Quit),
            Input::Nothing => {}
        }
        Ok(Flow::Continue)
    }

    pub fn handle_outcome(&mut self, outcome: CompletionOutcome, out: &mut impl Write) -> Result<()> {
        match outcome {
            CompletionOutcome::Loaded { total, .. } => {
                let pager = self.controller.pager();
                view::render_count(out, total)?;
                view::render_page(out, &pager.page(), total, pager.page_size())?;
            }
            CompletionOutcome::Failed(e) => {
                writeln!(out, "Search failed: {e}")?;
            }
            CompletionOutcome::Stale { .. } => {}
        }
        Ok(())
    }

    /// Stale completions leave the screen untouched
    pub fn renders(&self, outcome: &CompletionOutcome) -> bool {
        !matches!(outcome, CompletionOutcome::Stale { .. })
    }

    pub fn fields(&self) -> &QueryFields {
        &self.fields
    }

    pub fn controller(&self) -> &SearchController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SearchController<C> {
        &mut self.controller
    }
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "symdict> ")?;
    out.flush()?;
    Ok(())
}

#[async_trait::async_trait]
impl Command for BrowseCommand {
    async fn execute(&self) -> Result<()> {
        let catalog = Arc::new(JsonCatalog::new(&self.config.catalog_path));
        let controller = SearchController::with_page_size(catalog, self.config.page_size);
        controller
            .load_catalog()
            .await
            .wrap_err("Load symbol catalog error")?;
        info!(
            catalog = ?self.config.catalog_path,
            entries = controller.catalog().len(),
            "catalog ready"
        );

        let mut session = BrowserSession::new(controller);
        let mut out = std::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        writeln!(out, "Type `help` for commands.")?;
        prompt(&mut out)?;
        loop {
            let searching = session.controller().is_searching();
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match input::parse(&line) {
                        Ok(input) => {
                            if session.handle_input(input, &mut out)? == Flow::Quit {
                                break;
                            }
                        }
                        Err(e) => writeln!(out, "{e}")?,
                    }
                    prompt(&mut out)?;
                }
                Some(outcome) = session.controller_mut().next_completion(), if searching => {
                    if !session.renders(&outcome) {
                        continue;
                    }
                    writeln!(out)?;
                    session.handle_outcome(outcome, &mut out)?;
                    prompt(&mut out)?;
                }
            }
        }
        Ok(())
    }
}
