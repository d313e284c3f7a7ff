//! Where console commands come from.

use std::future::Future;
use std::io;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// A source of command lines.
pub trait LineSource {
    /// Reads the next line, showing `prompt` when the source is
    /// interactive. Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    fn read_line(&mut self, prompt: &str) -> impl Future<Output = io::Result<Option<String>>>;
}

/// Lines read from a pipe or an in-memory script. No prompt is shown.
pub struct PipedLines<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> PipedLines<R> {
    /// Reads lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: AsyncBufRead + Unpin> LineSource for PipedLines<R> {
    async fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// Interactive line editing with history, for a terminal.
pub struct Readline {
    editor: DefaultEditor,
}

impl Readline {
    /// Sets up the line editor on the controlling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Readline {
    // Blocks the thread until a line is entered.
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}
