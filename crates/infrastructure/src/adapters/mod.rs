//! Infrastructure adapters

mod devtools_tabs;
mod in_memory_tab;
mod osc52_clipboard;
mod system_clipboard;
mod tracing_notifier;

pub use devtools_tabs::DevToolsTabAccessor;
pub use in_memory_tab::InMemoryTab;
pub use osc52_clipboard::{Osc52Clipboard, osc52_sequence};
pub use system_clipboard::SystemClipboard;
pub use tracing_notifier::TracingNotifier;
