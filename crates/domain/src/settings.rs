//! Editor settings.
//!
//! Persisted as JSON; every field has a default so partial files load.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, ClipboardStrategy};

/// Default remote debugging endpoint of a locally running Chromium.
pub const DEFAULT_DEVTOOLS_ENDPOINT: &str = "http://127.0.0.1:9222";

/// User-configurable editor behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Only `http`/`https` pages can be edited.
    pub require_http_scheme: bool,
    /// End the session once an apply succeeds (popup behaviour). When
    /// false the session stays open on the new baseline (panel behaviour).
    pub close_on_apply: bool,
    /// Whether rows can be dragged.
    pub supports_drag_reorder: bool,
    /// Clipboard strategy.
    pub clipboard_strategy: ClipboardStrategy,
    /// Remote debugging endpoint used by the DevTools tab accessor.
    pub devtools_endpoint: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            require_http_scheme: true,
            close_on_apply: true,
            supports_drag_reorder: true,
            clipboard_strategy: ClipboardStrategy::Native,
            devtools_endpoint: DEFAULT_DEVTOOLS_ENDPOINT.to_string(),
        }
    }
}

impl EditorSettings {
    /// Returns the capability descriptor these settings describe.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities {
            supports_drag_reorder: self.supports_drag_reorder,
            clipboard_strategy: self.clipboard_strategy,
        }
    }

    /// Settings for an inspector panel: stays open after apply and uses the
    /// fallback clipboard.
    #[must_use]
    pub fn inspector_panel() -> Self {
        Self {
            close_on_apply: false,
            clipboard_strategy: ClipboardStrategy::Fallback,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"close_on_apply": false}"#).unwrap();
        assert!(!settings.close_on_apply);
        assert!(settings.require_http_scheme);
        assert_eq!(settings.devtools_endpoint, DEFAULT_DEVTOOLS_ENDPOINT);
    }

    #[test]
    fn test_clipboard_strategy_serializes_lowercase() {
        let json = serde_json::to_string(&ClipboardStrategy::Unavailable).unwrap();
        assert_eq!(json, "\"unavailable\"");
    }

    #[test]
    fn test_capabilities_follow_settings() {
        let settings = EditorSettings::inspector_panel();
        assert_eq!(settings.capabilities(), Capabilities::inspector_panel());
    }
}
