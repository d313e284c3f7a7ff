//! Application error types

use querylens_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// None of these is fatal: hosts turn each into a notification and keep
/// the session alive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain validation error occurred (unparsable URL, unknown row).
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The platform rejected a tab query or navigation.
    #[error("platform call failed: {0}")]
    PlatformCall(String),

    /// The host has no clipboard.
    #[error("clipboard not available")]
    ClipboardUnavailable,

    /// Writing to the clipboard failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// No URL is loaded, so there is nothing to edit.
    #[error("no URL loaded")]
    NotLoaded,

    /// The session was committed and accepts no further edits.
    #[error("editing session has ended")]
    SessionEnded,

    /// An apply is already waiting on the platform.
    #[error("an apply is already in progress")]
    ApplyInFlight,

    /// The built URL equals the baseline.
    #[error("no pending changes")]
    NothingToApply,

    /// The host does not support drag reordering.
    #[error("drag reordering is not supported by this host")]
    DragUnsupported,
}

impl ApplicationError {
    /// Returns true if the error comes from an unparsable or rejected URL.
    #[must_use]
    pub const fn is_invalid_url(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::InvalidUrl(_) | DomainError::UnsupportedScheme(_))
        )
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
