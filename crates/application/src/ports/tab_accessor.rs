//! Tab accessor port

use std::fmt;
use std::future::Future;

use crate::ApplicationResult;

/// Platform identifier of a browser tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    /// Creates a tab id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for TabId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// The foreground tab as reported by the platform.
///
/// Either part may be missing: privileged pages hide their URL and some
/// surfaces report no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveTab {
    /// Tab identifier.
    pub id: Option<TabId>,
    /// Current URL.
    pub url: Option<String>,
}

/// Port for reading and navigating the active tab.
pub trait TabAccessor {
    /// Returns the active tab.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::PlatformCall`] if the platform
    /// query fails.
    fn active_tab(&self) -> impl Future<Output = ApplicationResult<ActiveTab>>;

    /// Navigates `tab` to `url` and returns the id of the tab now showing
    /// `url`.
    ///
    /// Platforms that navigate in place return `tab` itself; platforms that
    /// replace the page return the id of the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::PlatformCall`] if the platform
    /// rejects the navigation.
    fn set_url(&self, tab: &TabId, url: &str)
    -> impl Future<Output = ApplicationResult<TabId>>;
}
