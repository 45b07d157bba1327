//! Line commands understood by the interactive browser.

use symbol_search::SearchField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `<field> [value]`: set a field, or blank it when no value is given
    SetField(SearchField, String),
    /// `search [field=value ...]`
    Search(Vec<(SearchField, String)>),
    Next,
    Clear,
    Show,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}`, type `help` for a list")]
    UnknownCommand(String),
    #[error("expected `field=value`, got `{0}`")]
    BadAssignment(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

pub const HELP: &str = "\
Commands:
  name|tag|class|category|key [value]   set a search field (no value clears it)
  search [field=value ...]              search with the current fields
  next                                  show the next page
  clear                                 clear results and all fields
  show                                  show the current fields
  help                                  show this help
  quit                                  leave the browser";

pub fn parse(line: &str) -> Result<Input, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line.trim(), ""),
    };

    let input = match command {
        "" => Input::Nothing,
        "search" | "s" => Input::Search(parse_assignments(rest)?),
        "next" | "n" => Input::Next,
        "clear" => Input::Clear,
        "show" | "fields" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => match other.parse::<SearchField>() {
            Ok(field) => Input::SetField(field, rest.to_string()),
            Err(_) => return Err(InputError::UnknownCommand(other.to_string())),
        },
    };
    Ok(input)
}

fn parse_assignments(rest: &str) -> Result<Vec<(SearchField, String)>, InputError> {
    rest.split_whitespace()
        .map(|pair| {
            let (field, value) = pair
                .split_once('=')
                .ok_or_else(|| InputError::BadAssignment(pair.to_string()))?;
            let field = field
                .parse::<SearchField>()
                .map_err(|_| InputError::UnknownField(field.to_string()))?;
            Ok((field, value.to_string()))
        })
        .collect()
}
