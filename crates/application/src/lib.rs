//! QueryLens Application - Editor session and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the hosting platform)
//! - The parameter editor session
//! - Application-level error handling

pub mod editor;
pub mod error;
pub mod ports;

pub use editor::{ApplyTicket, ParamEditor, messages};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    ActiveTab, ClipboardAccessor, Notification, NotificationLevel, Notifier, TabAccessor, TabId,
};
