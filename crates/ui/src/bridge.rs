//! UI Bridge Module
//!
//! Defines the commands a user can issue from the console and how a line
//! of input maps onto them. Row numbers are 1-based, as displayed.

use querylens_domain::Placement;
use thiserror::Error;

/// Commands sent from the console to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Show the rows and preview again.
    List,

    /// Append an empty row.
    Add,

    /// Replace the key of a row.
    Key {
        /// 1-based row number.
        row: usize,
        /// New key, as typed.
        text: String,
    },

    /// Replace the value of a row.
    Value {
        /// 1-based row number.
        row: usize,
        /// New value, as typed.
        text: String,
    },

    /// Remove a row.
    Remove {
        /// 1-based row number.
        row: usize,
    },

    /// Move a row to a position.
    Move {
        /// 1-based row number.
        row: usize,
        /// 1-based destination.
        to: usize,
    },

    /// Drop a row before or after another one.
    Drag {
        /// 1-based row number being dragged.
        row: usize,
        /// Side of the target to drop on.
        placement: Placement,
        /// 1-based row number of the drop target.
        target: usize,
    },

    /// Copy the built URL, or one row's value.
    Copy {
        /// 1-based row number; `None` copies the whole URL.
        row: Option<usize>,
    },

    /// Restore the baseline rows.
    Reset,

    /// Navigate the tab to the built URL.
    Apply,

    /// Show the command list.
    Help,

    /// Leave without applying.
    Quit,
}

/// Why a line could not be turned into a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The first word is not a command.
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    /// A required argument is missing.
    #[error("missing {0}")]
    MissingArgument(&'static str),

    /// A row number is not a positive integer.
    #[error("invalid row number '{0}'")]
    InvalidRow(String),

    /// Drag placement is neither `before` nor `after`.
    #[error("expected 'before' or 'after', got '{0}'")]
    InvalidPlacement(String),
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  list                      show rows and preview
  add                       add an empty row
  key N TEXT                set the key of row N
  value N TEXT              set the value of row N
  rm N                      remove row N
  mv N M                    move row N to position M
  drag N before|after M     drop row N next to row M
  copy [N]                  copy the URL, or the value of row N
  reset                     restore the original parameters
  apply                     open the edited URL in the tab
  quit                      leave without applying";

fn row_number(word: Option<&str>) -> Result<usize, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument("row number"))?;
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidRow(word.to_string())),
    }
}

/// Splits `rest` into a row number and the remaining text.
///
/// Only the single space after the number is consumed, so leading and
/// trailing spaces of the text survive.
fn row_and_text(rest: &str) -> Result<(usize, String), ParseError> {
    let (number, text) = rest.split_once(' ').unwrap_or((rest, ""));
    Ok((row_number(Some(number).filter(|n| !n.is_empty()))?, text.to_string()))
}

impl std::str::FromStr for UiCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let mut words = rest.split_whitespace();

        match command {
            "list" | "ls" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "key" => row_and_text(rest).map(|(row, text)| Self::Key { row, text }),
            "value" | "val" => row_and_text(rest).map(|(row, text)| Self::Value { row, text }),
            "rm" | "remove" => Ok(Self::Remove {
                row: row_number(words.next())?,
            }),
            "mv" | "move" => Ok(Self::Move {
                row: row_number(words.next())?,
                to: row_number(words.next())?,
            }),
            "drag" => {
                let row = row_number(words.next())?;
                let placement = match words.next() {
                    Some("before") => Placement::Before,
                    Some("after") => Placement::After,
                    Some(other) => return Err(ParseError::InvalidPlacement(other.to_string())),
                    None => return Err(ParseError::MissingArgument("before|after")),
                };
                let target = row_number(words.next())?;
                Ok(Self::Drag {
                    row,
                    placement,
                    target,
                })
            }
            "copy" | "cp" => Ok(Self::Copy {
                row: words.next().map(|w| row_number(Some(w))).transpose()?,
            }),
            "reset" => Ok(Self::Reset),
            "apply" => Ok(Self::Apply),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}
