//! Clipboard port

use std::future::Future;

use crate::ApplicationResult;

/// Port for writing text to the clipboard.
///
/// Best effort: a missing clipboard is reported as
/// [`crate::ApplicationError::ClipboardUnavailable`], never a panic.
pub trait ClipboardAccessor {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard exists or the write fails.
    fn write_text(&self, text: &str) -> impl Future<Output = ApplicationResult<()>>;
}
