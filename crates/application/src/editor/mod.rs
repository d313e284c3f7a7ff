//! The parameter editor session.
//!
//! [`ParamEditor`] is the only stateful component: it owns the baseline URL
//! and the presentation rows, and derives everything else (built URL,
//! change highlighting, pending flag) from those two on demand. Hosts call
//! a mutation, then re-read whichever derived view they display.

mod apply;
mod copy;
pub mod messages;

#[cfg(test)]
mod fakes;

use querylens_domain::{
    Capabilities, EditorSettings, ParamDiff, ParsedUrl, Placement, PreviewSegment, QueryParam,
    QueryParams, RowId, Rows, SessionPhase, build_url, diff_for_display, has_pending_changes,
    load_url_checked, render_preview,
};
use tracing::{debug, info, warn};

use crate::ports::{ClipboardAccessor, Notification, Notifier, TabAccessor, TabId};
use crate::{ApplicationError, ApplicationResult};

pub use apply::ApplyTicket;

/// Baseline of a session: the URL rows are compared and reset against.
#[derive(Debug, Clone)]
struct Baseline {
    parsed: ParsedUrl,
    normalized: String,
}

impl Baseline {
    fn new(parsed: ParsedUrl) -> Self {
        let normalized = parsed.normalized();
        Self { parsed, normalized }
    }
}

/// Editor for the query parameters of one tab URL.
///
/// Parameterized by the platform ports instead of being specialized per
/// host surface; host differences are expressed through [`Capabilities`]
/// and [`EditorSettings`].
pub struct ParamEditor<T, C, N> {
    tabs: T,
    clipboard: C,
    notifier: N,
    capabilities: Capabilities,
    settings: EditorSettings,
    baseline: Option<Baseline>,
    rows: Rows,
    phase: SessionPhase,
    tab_id: Option<TabId>,
    apply_in_flight: bool,
}

impl<T, C, N> ParamEditor<T, C, N>
where
    T: TabAccessor,
    C: ClipboardAccessor,
    N: Notifier,
{
    /// Creates an editor with nothing loaded.
    #[must_use]
    pub fn new(
        tabs: T,
        clipboard: C,
        notifier: N,
        capabilities: Capabilities,
        settings: EditorSettings,
    ) -> Self {
        Self {
            tabs,
            clipboard,
            notifier,
            capabilities,
            settings,
            baseline: None,
            rows: Rows::new(),
            phase: SessionPhase::Uninitialized,
            tab_id: None,
            apply_in_flight: false,
        }
    }

    /// Starts a session from the platform's active tab.
    ///
    /// A failure leaves the editor with no rows and apply disabled; the user
    /// is notified and the error is returned for the host to log.
    ///
    /// # Errors
    ///
    /// Returns the platform error, or the URL error if the tab URL is
    /// missing, unparsable or not an http(s) page.
    pub async fn start(&mut self) -> ApplicationResult<()> {
        let tab = match self.tabs.active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                self.fail_load(&e);
                return Err(e);
            }
        };
        self.tab_id = tab.id;
        self.load(tab.url.as_deref().unwrap_or_default())
    }

    /// Loads `raw` as the new baseline, replacing any rows.
    ///
    /// Also used when the tab navigates while the editor is open. Once a
    /// URL is loaded, a later URL that cannot be loaded leaves the baseline,
    /// rows and phase untouched; the user is only notified.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `raw` cannot be loaded.
    pub fn load(&mut self, raw: &str) -> ApplicationResult<()> {
        match load_url_checked(raw, self.settings.require_http_scheme) {
            Ok(parsed) => {
                self.rows = Rows::from_params(parsed.params());
                info!(url = %parsed.as_str(), params = self.rows.len(), "loaded tab URL");
                self.baseline = Some(Baseline::new(parsed));
                self.phase = SessionPhase::Loaded;
                Ok(())
            }
            Err(e) => {
                let err = ApplicationError::from(e);
                if self.baseline.is_some() {
                    warn!(error = %err, url = raw, "ignoring unloadable URL");
                    self.notifier.notify(Notification::error(messages::INVALID_URL));
                } else {
                    self.fail_load(&err);
                }
                Err(err)
            }
        }
    }

    /// Reloads after the tab navigated on its own.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the new URL cannot be loaded.
    pub fn on_navigated(&mut self, raw: &str) -> ApplicationResult<()> {
        debug!(url = raw, "tab navigated");
        self.load(raw)
    }

    fn fail_load(&mut self, err: &ApplicationError) {
        warn!(error = %err, "failed to load tab URL");
        self.baseline = None;
        self.rows = Rows::new();
        self.phase = SessionPhase::LoadFailed {
            reason: err.to_string(),
        };
        self.notifier.notify(Notification::error(messages::LOAD_FAILED));
    }

    // --- Row mutations ---

    /// Appends an empty row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is loaded or the session has ended.
    pub fn add_row(&mut self) -> ApplicationResult<RowId> {
        self.ensure_editable()?;
        let id = self.rows.push_empty();
        self.touched();
        Ok(id)
    }

    /// Removes a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is unknown or the session is not editable.
    pub fn remove_row(&mut self, id: &RowId) -> ApplicationResult<()> {
        self.ensure_editable()?;
        self.rows.remove(id)?;
        self.touched();
        Ok(())
    }

    /// Replaces the key of a row, as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is unknown or the session is not editable.
    pub fn set_key(&mut self, id: &RowId, key: impl Into<String>) -> ApplicationResult<()> {
        self.ensure_editable()?;
        self.rows.get_mut(id)?.key = key.into();
        self.touched();
        Ok(())
    }

    /// Replaces the value of a row, as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is unknown or the session is not editable.
    pub fn set_value(&mut self, id: &RowId, value: impl Into<String>) -> ApplicationResult<()> {
        self.ensure_editable()?;
        self.rows.get_mut(id)?.value = value.into();
        self.touched();
        Ok(())
    }

    /// Moves a row to a new position.
    ///
    /// # Errors
    ///
    /// Returns an error if the row or position is invalid or the session is
    /// not editable.
    pub fn move_row(&mut self, id: &RowId, to_index: usize) -> ApplicationResult<()> {
        self.ensure_editable()?;
        self.rows.move_to(id, to_index)?;
        self.touched();
        Ok(())
    }

    /// Drops `dragged` before or after `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DragUnsupported`] when the host cannot
    /// drag, or an error if either row is unknown.
    pub fn move_row_relative(
        &mut self,
        dragged: &RowId,
        target: &RowId,
        placement: Placement,
    ) -> ApplicationResult<()> {
        if !self.capabilities.supports_drag_reorder {
            return Err(ApplicationError::DragUnsupported);
        }
        self.ensure_editable()?;
        self.rows.move_relative(dragged, target, placement)?;
        self.touched();
        Ok(())
    }

    /// Restores the rows to the baseline parameters.
    ///
    /// Allowed while an apply is in flight; whichever finishes last decides
    /// the state.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is loaded or the session has ended.
    pub fn reset(&mut self) -> ApplicationResult<()> {
        self.ensure_editable()?;
        let baseline = self.baseline.as_ref().ok_or(ApplicationError::NotLoaded)?;
        self.rows = Rows::from_params(baseline.parsed.params());
        self.phase = SessionPhase::Loaded;
        debug!("rows reset to baseline");
        Ok(())
    }

    fn ensure_editable(&self) -> ApplicationResult<()> {
        match self.phase {
            SessionPhase::Loaded | SessionPhase::Editing => Ok(()),
            SessionPhase::Committed => Err(ApplicationError::SessionEnded),
            SessionPhase::Uninitialized | SessionPhase::LoadFailed { .. } => {
                Err(ApplicationError::NotLoaded)
            }
        }
    }

    fn touched(&mut self) {
        self.phase = SessionPhase::Editing;
        debug!(
            rows = self.rows.len(),
            pending = self.has_pending_changes(),
            "rows changed"
        );
    }

    // --- Derived views ---

    /// Returns the rows in presentation order.
    #[must_use]
    pub const fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Returns the parameters the rows serialize to: trimmed keys, rows with
    /// an empty key left out.
    #[must_use]
    pub fn current_params(&self) -> QueryParams {
        self.rows
            .iter()
            .filter(|r| !r.key.trim().is_empty())
            .map(|r| QueryParam::new(r.key.trim(), r.value.clone()))
            .collect()
    }

    /// Returns the URL the rows currently build, if a URL is loaded.
    #[must_use]
    pub fn built_url(&self) -> Option<String> {
        self.baseline
            .as_ref()
            .map(|b| build_url(&self.rows.to_params(), &b.parsed))
    }

    /// Returns the normalized baseline URL, if one is loaded.
    #[must_use]
    pub fn baseline_url(&self) -> Option<&str> {
        self.baseline.as_ref().map(|b| b.normalized.as_str())
    }

    /// Returns the per-parameter change annotations.
    #[must_use]
    pub fn diff(&self) -> Vec<ParamDiff> {
        self.baseline.as_ref().map_or_else(Vec::new, |b| {
            diff_for_display(&self.current_params(), b.parsed.params())
        })
    }

    /// Returns the highlighted preview of the built URL.
    #[must_use]
    pub fn preview(&self) -> Vec<PreviewSegment> {
        let (Some(baseline), Some(built)) = (self.baseline.as_ref(), self.built_url()) else {
            return Vec::new();
        };
        render_preview(&built, baseline.parsed.params()).unwrap_or_else(|_| {
            vec![PreviewSegment {
                text: built,
                highlighted: false,
            }]
        })
    }

    /// Returns true if the built URL differs from the baseline.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        match (self.built_url(), self.baseline_url()) {
            (Some(built), Some(baseline)) => has_pending_changes(&built, baseline),
            _ => false,
        }
    }

    /// Returns true if the apply action should be enabled.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.phase.is_editable() && !self.apply_in_flight && self.has_pending_changes()
    }

    /// Returns the session phase.
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Returns true while an apply waits on the platform.
    #[must_use]
    pub const fn is_apply_in_flight(&self) -> bool {
        self.apply_in_flight
    }

    /// Returns the id of the tab being edited, if the platform reported one.
    #[must_use]
    pub const fn tab_id(&self) -> Option<&TabId> {
        self.tab_id.as_ref()
    }

    /// Returns the host capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the tab accessor.
    #[must_use]
    pub const fn tab_accessor(&self) -> &T {
        &self.tabs
    }

    /// Returns the clipboard accessor.
    #[must_use]
    pub const fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}
