mod catalog;
mod cli;
mod command;
mod config;
mod error;
mod input;
mod view;

use error::WrapErr;

use clap::Parser;
use tracing::Level;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load()
        .context("Load configuration error")?
        .with_overrides(command_line.catalog, command_line.page_size);

    let cmd: Box<dyn command::Command> = match command_line.command.unwrap_or(cli::Commands::Browse) {
        cli::Commands::Browse => Box::new(command::BrowseCommand::new(cfg)),
        cli::Commands::Search { fields, all, pages } => Box::new(command::SearchCommand::new(
            cfg,
            fields.to_query_fields(),
            (!all).then_some(pages),
        )),
        cli::Commands::Fields => Box::new(command::FieldsCommand),
    };
    cmd.execute().await
}

/// Logs go to stderr so result listings on stdout stay clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
