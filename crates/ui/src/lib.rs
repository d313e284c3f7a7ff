//! QueryLens UI - Row presentation layer
//!
//! This crate renders the editor for a terminal: numbered rows, a preview
//! of the built URL with changed parts highlighted, and transient
//! notifications. Commands typed by the user are parsed in [`bridge`] and
//! applied to the editor by [`console`]; [`input`] supplies the lines, with
//! line editing and history when attached to a terminal.

pub mod bridge;
pub mod console;
pub mod input;
pub mod view;

pub use bridge::{HELP, ParseError, UiCommand};
pub use console::{ConsoleEditor, PROMPT, SessionEnd, run_session};
pub use input::{LineSource, PipedLines, Readline};
pub use view::{Style, render_notification, render_preview, render_rows};
