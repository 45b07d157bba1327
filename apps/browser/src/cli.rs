use clap::{ArgAction, Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use symbol_search::QueryFields;

#[derive(Parser, Debug)]
#[command(name = "symdict", version, about = "Search a symbol dictionary and browse the results page by page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Symbol catalog file, overrides `catalog-path` from the config file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Symbols per page, overrides `page-size` from the config file
    #[arg(long, global = true)]
    pub page_size: Option<NonZeroUsize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    Browse,
    /// Run one search and print its pages
    Search {
        #[command(flatten)]
        fields: FieldArgs,
        /// Print every page instead of only the first ones
        #[arg(long, conflicts_with = "pages")]
        all: bool,
        /// Number of pages to print
        #[arg(long, default_value_t = NonZeroUsize::MIN)]
        pages: NonZeroUsize,
    },
    /// List the searchable fields
    Fields,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long = "class")]
    pub symbol_class: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub key: Option<String>,
}

impl FieldArgs {
    pub fn to_query_fields(&self) -> QueryFields {
        QueryFields {
            name: self.name.clone().unwrap_or_default(),
            tag: self.tag.clone().unwrap_or_default(),
            symbol_class: self.symbol_class.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            key: self.key.clone().unwrap_or_default(),
        }
    }
}
