//! Native clipboard adapter using arboard.

use std::sync::Mutex;

use arboard::Clipboard;
use querylens_application::ports::ClipboardAccessor;
use querylens_application::{ApplicationError, ApplicationResult};

/// The operating system clipboard.
///
/// Initialised on first use; a desktop session without a clipboard is
/// reported as unavailable rather than failing at start-up.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    /// Creates the adapter without touching the clipboard yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardAccessor for SystemClipboard {
    async fn write_text(&self, text: &str) -> ApplicationResult<()> {
        let mut guard = self
            .clipboard
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if guard.is_none() {
            let clipboard = Clipboard::new().map_err(|e| {
                tracing::warn!(error = %e, "system clipboard init failed");
                ApplicationError::ClipboardUnavailable
            })?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(ApplicationError::ClipboardUnavailable);
        };
        clipboard
            .set_text(text)
            .map_err(|e| ApplicationError::Clipboard(e.to_string()))
    }
}
