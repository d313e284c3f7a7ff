//! Clipboard actions.

use querylens_domain::RowId;
use tracing::{error, warn};

use super::{ParamEditor, messages};
use crate::ports::{ClipboardAccessor, Notification, Notifier, TabAccessor};
use crate::{ApplicationError, ApplicationResult};

impl<T, C, N> ParamEditor<T, C, N>
where
    T: TabAccessor,
    C: ClipboardAccessor,
    N: Notifier,
{
    /// Copies the built URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotLoaded`] with nothing loaded, or the
    /// clipboard error. The user has been notified either way.
    pub async fn copy_url(&self) -> ApplicationResult<()> {
        let url = self.built_url().ok_or(ApplicationError::NotLoaded)?;
        self.copy_text(&url, messages::URL_COPIED, messages::URL_COPY_FAILED)
            .await
    }

    /// Copies the value of one row, as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is unknown or the clipboard fails.
    pub async fn copy_value(&self, id: &RowId) -> ApplicationResult<()> {
        let value = self.rows.get(id)?.value.clone();
        self.copy_text(&value, messages::VALUE_COPIED, messages::VALUE_COPY_FAILED)
            .await
    }

    async fn copy_text(&self, text: &str, done: &str, failed: &str) -> ApplicationResult<()> {
        if !self.capabilities.clipboard_strategy.is_available() {
            warn!("clipboard capability absent");
            self.notifier
                .notify(Notification::error(messages::CLIPBOARD_UNAVAILABLE));
            return Err(ApplicationError::ClipboardUnavailable);
        }

        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(done));
                Ok(())
            }
            Err(ApplicationError::ClipboardUnavailable) => {
                warn!("clipboard unavailable");
                self.notifier
                    .notify(Notification::error(messages::CLIPBOARD_UNAVAILABLE));
                Err(ApplicationError::ClipboardUnavailable)
            }
            Err(e) => {
                error!(error = %e, "clipboard operation failed");
                self.notifier.notify(Notification::error(failed));
                Err(e)
            }
        }
    }
}
