//! Host capability descriptor.
//!
//! Hosts declare what they support when they construct the editor, instead
//! of the editor probing its environment.

use serde::{Deserialize, Serialize};

/// How the host writes to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardStrategy {
    /// The platform clipboard API.
    #[default]
    Native,
    /// A host-specific fallback, for surfaces where the native API is blocked.
    Fallback,
    /// No clipboard at all; copy actions report unavailability.
    Unavailable,
}

impl ClipboardStrategy {
    /// Returns true if copy actions should reach the clipboard port.
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

/// What the hosting surface can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Rows can be reordered by dragging.
    pub supports_drag_reorder: bool,
    /// Clipboard access strategy.
    pub clipboard_strategy: ClipboardStrategy,
}

impl Capabilities {
    /// Capabilities of the toolbar popup.
    #[must_use]
    pub const fn popup() -> Self {
        Self {
            supports_drag_reorder: true,
            clipboard_strategy: ClipboardStrategy::Native,
        }
    }

    /// Capabilities of the inspector panel, where the native clipboard API
    /// is blocked.
    #[must_use]
    pub const fn inspector_panel() -> Self {
        Self {
            supports_drag_reorder: true,
            clipboard_strategy: ClipboardStrategy::Fallback,
        }
    }

    /// A host with neither drag reordering nor a clipboard.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            supports_drag_reorder: false,
            clipboard_strategy: ClipboardStrategy::Unavailable,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::popup()
    }
}
