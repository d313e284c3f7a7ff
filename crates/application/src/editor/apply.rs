//! Applying the built URL to the tab.
//!
//! Apply is split in two so a host that cannot hold the editor across an
//! await (a UI callback, say) can still keep a single apply in flight:
//! [`ParamEditor::begin_apply`] hands out a ticket and disables apply,
//! the host performs the navigation, and [`ParamEditor::finish_apply`]
//! records the outcome. [`ParamEditor::apply`] does all three.
//!
//! A failed apply rolls nothing back. A reset while an apply is in flight
//! changes the rows only; when the apply then succeeds, the applied URL
//! becomes the baseline and the reset rows are compared against it.

use querylens_domain::{SessionPhase, load_url};
use tracing::{debug, error, info, warn};

use super::{Baseline, ParamEditor, messages};
use crate::ports::{ClipboardAccessor, Notification, Notifier, TabAccessor, TabId};
use crate::{ApplicationError, ApplicationResult};

/// An apply that has been started and not yet finished.
#[derive(Debug)]
#[must_use = "an apply ticket must be passed to finish_apply"]
pub struct ApplyTicket {
    tab_id: Option<TabId>,
    url: String,
}

impl ApplyTicket {
    /// Tab to navigate; `None` if the platform reported no id.
    #[must_use]
    pub const fn tab_id(&self) -> Option<&TabId> {
        self.tab_id.as_ref()
    }

    /// URL to navigate to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<T, C, N> ParamEditor<T, C, N>
where
    T: TabAccessor,
    C: ClipboardAccessor,
    N: Notifier,
{
    /// Starts an apply of the currently built URL.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::ApplyInFlight`] if an apply is already running
    /// - [`ApplicationError::SessionEnded`] after a commit
    /// - [`ApplicationError::NotLoaded`] if no URL is loaded
    /// - [`ApplicationError::NothingToApply`] if there are no pending changes
    pub fn begin_apply(&mut self) -> ApplicationResult<ApplyTicket> {
        if self.apply_in_flight {
            return Err(ApplicationError::ApplyInFlight);
        }
        self.ensure_editable()?;
        let url = self.built_url().ok_or(ApplicationError::NotLoaded)?;
        if !self.has_pending_changes() {
            return Err(ApplicationError::NothingToApply);
        }

        self.apply_in_flight = true;
        Ok(ApplyTicket {
            tab_id: self.tab_id.clone(),
            url,
        })
    }

    /// Records the outcome of the navigation started by `ticket`.
    ///
    /// A successful outcome carries the id of the tab now showing the URL,
    /// or `None` when no navigation was made. On success the applied URL
    /// becomes the baseline, later applies target the reported tab and, if
    /// the host closes on apply, the session is committed. On failure the
    /// user is told to retry and the rows stay as they are.
    ///
    /// # Errors
    ///
    /// Returns the navigation error unchanged.
    pub fn finish_apply(
        &mut self,
        ticket: ApplyTicket,
        outcome: ApplicationResult<Option<TabId>>,
    ) -> ApplicationResult<()> {
        self.apply_in_flight = false;

        let navigated_tab = match outcome {
            Ok(tab) => tab,
            Err(e) => {
                error!(error = %e, url = %ticket.url, "failed to apply changes");
                self.notifier.notify(Notification::error(messages::APPLY_FAILED));
                return Err(e);
            }
        };
        if let Some(tab) = navigated_tab {
            if self.tab_id.as_ref() != Some(&tab) {
                debug!(old = ?self.tab_id, new = %tab, "tab replaced by navigation");
            }
            self.tab_id = Some(tab);
        }

        let parsed = load_url(&ticket.url)?;
        self.baseline = Some(Baseline::new(parsed));
        info!(url = %ticket.url, "applied changes");
        self.notifier.notify(Notification::success(messages::APPLIED));

        self.phase = if self.settings.close_on_apply {
            SessionPhase::Committed
        } else if self.has_pending_changes() {
            SessionPhase::Editing
        } else {
            SessionPhase::Loaded
        };
        Ok(())
    }

    /// Navigates the tab to the built URL.
    ///
    /// When the platform reported no tab id the navigation is skipped and
    /// the apply still completes.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::begin_apply`] and the platform error
    /// if navigation fails; the latter can be retried.
    pub async fn apply(&mut self) -> ApplicationResult<()> {
        let ticket = self.begin_apply()?;
        let outcome = match ticket.tab_id() {
            Some(tab) => self.tabs.set_url(tab, ticket.url()).await.map(Some),
            None => {
                warn!("active tab has no id, skipping navigation");
                Ok(None)
            }
        };
        self.finish_apply(ticket, outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use querylens_domain::{Capabilities, EditorSettings};
    use pretty_assertions::assert_eq;

    use super::super::fakes::{FakeClipboard, FakeTabs, editor, editor_with};
    use super::*;
    use crate::NotificationLevel;

    async fn edited(url: &str) -> super::super::fakes::TestEditor {
        let mut editor = editor(url);
        editor.start().await.unwrap();
        let first = editor.rows().at(0).unwrap().id.clone();
        editor.set_value(&first, "changed").unwrap();
        editor
    }

    #[tokio::test]
    async fn test_apply_navigates_and_commits() {
        let mut editor = edited("https://e.com/?a=1").await;
        editor.apply().await.unwrap();

        assert_eq!(
            editor.tab_accessor().navigations.borrow().clone(),
            vec![(TabId::from(7), "https://e.com/?a=changed".to_string())]
        );
        assert_eq!(editor.phase(), &SessionPhase::Committed);
        assert_eq!(editor.baseline_url(), Some("https://e.com/?a=changed"));
        assert!(!editor.has_pending_changes());
        assert!(!editor.can_apply());
        assert_eq!(editor.add_row().unwrap_err(), ApplicationError::SessionEnded);
    }

    #[tokio::test]
    async fn test_apply_without_changes_is_refused() {
        let mut editor = editor("https://e.com/?a=1");
        editor.start().await.unwrap();
        assert_eq!(
            editor.apply().await.unwrap_err(),
            ApplicationError::NothingToApply
        );
    }

    #[tokio::test]
    async fn test_second_apply_refused_while_in_flight() {
        let mut editor = edited("https://e.com/?a=1").await;
        let ticket = editor.begin_apply().unwrap();
        assert!(editor.is_apply_in_flight());
        assert!(!editor.can_apply());
        assert_eq!(
            editor.begin_apply().unwrap_err(),
            ApplicationError::ApplyInFlight
        );

        editor.finish_apply(ticket, Ok(None)).unwrap();
        assert!(!editor.is_apply_in_flight());
    }

    #[tokio::test]
    async fn test_failed_apply_keeps_rows_and_allows_retry() {
        let mut editor = edited("https://e.com/?a=1").await;
        editor.tab_accessor().fail_next_set();

        let err = editor.apply().await.unwrap_err();
        assert!(matches!(err, ApplicationError::PlatformCall(_)));
        assert_eq!(editor.built_url().as_deref(), Some("https://e.com/?a=changed"));
        assert_eq!(editor.baseline_url(), Some("https://e.com/?a=1"));
        assert!(editor.can_apply());
        let last = editor.notifier().last().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
        assert_eq!(last.message, messages::APPLY_FAILED);

        editor.apply().await.unwrap();
        assert_eq!(editor.tab_accessor().navigations.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_apply_without_tab_id_still_commits() {
        let mut editor = editor_with(
            FakeTabs::without_id("https://e.com/?a=1"),
            FakeClipboard::default(),
            Capabilities::popup(),
            EditorSettings::default(),
        );
        editor.start().await.unwrap();
        let id = editor.add_row().unwrap();
        editor.set_key(&id, "b").unwrap();

        editor.apply().await.unwrap();
        assert!(editor.tab_accessor().navigations.borrow().is_empty());
        assert_eq!(editor.phase(), &SessionPhase::Committed);
    }

    #[tokio::test]
    async fn test_panel_stays_open_after_apply() {
        let mut editor = editor_with(
            FakeTabs::new("https://e.com/?a=1"),
            FakeClipboard::default(),
            Capabilities::inspector_panel(),
            EditorSettings::inspector_panel(),
        );
        editor.start().await.unwrap();
        let id = editor.add_row().unwrap();
        editor.set_key(&id, "b").unwrap();

        editor.apply().await.unwrap();
        assert_eq!(editor.phase(), &SessionPhase::Loaded);
        assert!(!editor.has_pending_changes());
        assert!(editor.add_row().is_ok());
    }

    #[tokio::test]
    async fn test_panel_follows_replacement_tab() {
        let mut editor = editor_with(
            FakeTabs::replacing("https://e.com/?a=1"),
            FakeClipboard::default(),
            Capabilities::inspector_panel(),
            EditorSettings::inspector_panel(),
        );
        editor.start().await.unwrap();
        let first = editor.rows().at(0).unwrap().id.clone();

        editor.set_value(&first, "2").unwrap();
        editor.apply().await.unwrap();
        assert_eq!(editor.tab_id(), Some(&TabId::new("7-1")));

        editor.set_value(&first, "3").unwrap();
        editor.apply().await.unwrap();
        assert_eq!(
            editor.tab_accessor().navigations.borrow().clone(),
            vec![
                (TabId::from(7), "https://e.com/?a=2".to_string()),
                (TabId::new("7-1"), "https://e.com/?a=3".to_string()),
            ]
        );
        assert_eq!(editor.tab_id(), Some(&TabId::new("7-2")));
    }

    #[tokio::test]
    async fn test_reset_during_apply_compares_against_applied_url() {
        let mut editor = editor_with(
            FakeTabs::new("https://e.com/?a=1"),
            FakeClipboard::default(),
            Capabilities::popup(),
            EditorSettings::inspector_panel(),
        );
        editor.start().await.unwrap();
        let first = editor.rows().at(0).unwrap().id.clone();
        editor.set_value(&first, "2").unwrap();

        let ticket = editor.begin_apply().unwrap();
        editor.reset().unwrap();
        editor.finish_apply(ticket, Ok(None)).unwrap();

        assert_eq!(editor.baseline_url(), Some("https://e.com/?a=2"));
        assert_eq!(editor.built_url().as_deref(), Some("https://e.com/?a=1"));
        assert_eq!(editor.phase(), &SessionPhase::Editing);
        assert!(editor.has_pending_changes());
    }
}
