//! Terminal clipboard fallback.
//!
//! Writes an OSC 52 escape sequence so the terminal emulator, rather than
//! the OS clipboard API, stores the text. Works over SSH and in sessions
//! where no native clipboard is reachable.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use querylens_application::ports::ClipboardAccessor;
use querylens_application::{ApplicationError, ApplicationResult};

/// Builds the OSC 52 "set clipboard" sequence for `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard that asks the terminal to store the text.
pub struct Osc52Clipboard<W: Write = Stdout> {
    out: RefCell<W>,
}

impl Osc52Clipboard<Stdout> {
    /// Writes sequences to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Writes sequences to `out`.
    pub const fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ClipboardAccessor for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> ApplicationResult<()> {
        let mut out = self.out.borrow_mut();
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ApplicationError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_encodes_base64() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[tokio::test]
    async fn test_write_text_emits_sequence() {
        let clipboard = Osc52Clipboard::with_writer(Vec::new());
        clipboard.write_text("a=1").await.unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, osc52_sequence("a=1"));
    }
}
