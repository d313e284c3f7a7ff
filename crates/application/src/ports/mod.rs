//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the editor and the hosting platform.
//! Each port is a trait that can be implemented by adapters in the
//! infrastructure layer, or by plain fakes in tests.

mod clipboard;
mod notifier;
mod tab_accessor;

pub use clipboard::ClipboardAccessor;
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use tab_accessor::{ActiveTab, TabAccessor, TabId};
