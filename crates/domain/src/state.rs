//! Editing session state machine.
//!
//! ```text
//! Uninitialized -> Loaded -> Editing (on every row mutation)
//! Editing -> Loaded     (reset)
//! Editing -> Committed  (apply; terminal when the host closes on apply)
//! ```

use serde::{Deserialize, Serialize};

/// Phase of one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    /// No URL has been loaded yet.
    #[default]
    Uninitialized,

    /// The URL could not be loaded; no rows, apply disabled.
    LoadFailed {
        /// Human-readable reason.
        reason: String,
    },

    /// Rows mirror the baseline.
    Loaded,

    /// At least one row mutation since load or reset.
    Editing,

    /// The built URL was applied and the session is over.
    Committed,
}

impl SessionPhase {
    /// Returns true if a URL is loaded and rows may be edited.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Loaded | Self::Editing)
    }

    /// Returns true once the session has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed)
    }
}
