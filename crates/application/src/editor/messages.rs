//! User-facing notification texts.

/// The active tab URL could not be read or parsed.
pub const LOAD_FAILED: &str = "Unable to load the current tab URL.";
/// The tab moved to a URL that cannot be edited; the session is kept.
pub const INVALID_URL: &str = "Invalid URL format";
/// The whole URL was copied.
pub const URL_COPIED: &str = "URL copied to clipboard!";
/// Copying the whole URL failed.
pub const URL_COPY_FAILED: &str = "Failed to copy URL";
/// A row value was copied.
pub const VALUE_COPIED: &str = "Value copied!";
/// Copying a row value failed.
pub const VALUE_COPY_FAILED: &str = "Failed to copy value";
/// The host has no clipboard.
pub const CLIPBOARD_UNAVAILABLE: &str = "Clipboard not available";
/// The tab was navigated to the built URL.
pub const APPLIED: &str = "Changes applied!";
/// Navigation failed; the user may try again.
pub const APPLY_FAILED: &str = "Failed to apply changes. Please try again.";
