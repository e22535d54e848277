//! Shell command parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::filters::FilterKey;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `set <field> <value>`: text field change, field given by name
    Set { field: String, value: String },
    /// `unset <field>`
    Unset(FilterKey),
    /// `select <spotCode|attendanceType> <value>`: dropdown change
    Select { key: FilterKey, value: String },
    /// `filters`
    Filters,
    /// `spots`
    Spots,
    /// `search`
    Search,
    /// `clear`
    Clear,
    /// `table`
    Table,
    /// `export [path]`
    Export(Option<PathBuf>),
    /// `reload`
    Reload,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Why a line could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type `help` for the list)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),

    #[error("'{0}' is not a dropdown filter; use `set {0} <value>`")]
    NotDropdown(FilterKey),
}

/// Shell help text.
pub const HELP: &str = "\
Commands:
  set <field> <value>        change a text filter (date, startDate, endDate,
                             concernMobileNumber, village, union, upozila, district)
  select spotCode <code>     choose a spot from the spot list
  select attendanceType <t>  female | male | child
  unset <field>              clear one filter
  filters                    show the current filters
  spots                      list selectable spots
  search                     fetch attendance with the current filters
  clear                      reset all filters and fetch again
  table                      show the current rows
  export [path]              write the rows to a spreadsheet (default attendance.xlsx)
  reload                     start over: reset everything and reload
  help                       this text
  quit                       leave";

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_key(name: &str) -> Result<FilterKey, CommandError> {
    name.parse::<FilterKey>()
        .map_err(|_| CommandError::UnknownFilter(name.to_string()))
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = split_word(line);

    let command = match word.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::Usage("set <field> <value>"));
            }
            ShellCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "unset" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("unset <field>"));
            }
            ShellCommand::Unset(parse_key(rest)?)
        }
        "select" => {
            let (field, value) = split_word(rest);
            if field.is_empty() || value.is_empty() {
                return Err(CommandError::Usage("select <spotCode|attendanceType> <value>"));
            }
            let key = parse_key(field)?;
            if !key.is_dropdown() {
                return Err(CommandError::NotDropdown(key));
            }
            ShellCommand::Select {
                key,
                value: value.to_string(),
            }
        }
        "filters" => ShellCommand::Filters,
        "spots" => ShellCommand::Spots,
        "search" => ShellCommand::Search,
        "clear" => ShellCommand::Clear,
        "table" => ShellCommand::Table,
        "export" => ShellCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(CommandError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}
