use super::Command;
use crate::error::Result;
use std::io::Write;
use strum::IntoEnumIterator;
use symbol_search::SearchField;

pub struct FieldsCommand;

fn describe(field: SearchField) -> &'static str {
    match field {
        SearchField::Name => "part of the symbol name",
        SearchField::Tag => "one of the symbol's tags",
        SearchField::SymbolClass => "symbol class",
        SearchField::Category => "symbol category",
        SearchField::Key => "unique symbol key",
    }
}

#[async_trait::async_trait]
impl Command for FieldsCommand {
    async fn execute(&self) -> Result<()> {
        let mut out = std::io::stdout();
        for field in SearchField::iter() {
            writeln!(out, "{:<9} {}", field.to_string(), describe(field))?;
        }
        Ok(())
    }
}
