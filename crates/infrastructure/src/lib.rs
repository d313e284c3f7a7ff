//! QueryLens Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings persistence.

pub mod adapters;
pub mod persistence;

pub use adapters::{
    DevToolsTabAccessor, InMemoryTab, Osc52Clipboard, SystemClipboard, TracingNotifier,
    osc52_sequence,
};
pub use persistence::{SettingsError, SettingsRepository};
