//! Adapter selection for the command-line host.

use querylens_application::ports::{ActiveTab, ClipboardAccessor, TabAccessor, TabId};
use querylens_application::{ApplicationError, ApplicationResult};
use querylens_domain::ClipboardStrategy;
use querylens_infrastructure::{DevToolsTabAccessor, InMemoryTab, Osc52Clipboard, SystemClipboard};

/// Where the edited URL comes from.
pub enum HostTabs {
    /// A URL given on the command line.
    Memory(InMemoryTab),
    /// The foreground page of a browser with remote debugging enabled.
    DevTools(DevToolsTabAccessor),
}

impl TabAccessor for HostTabs {
    async fn active_tab(&self) -> ApplicationResult<ActiveTab> {
        match self {
            Self::Memory(tab) => tab.active_tab().await,
            Self::DevTools(tabs) => tabs.active_tab().await,
        }
    }

    async fn set_url(&self, tab: &TabId, url: &str) -> ApplicationResult<TabId> {
        match self {
            Self::Memory(memory) => memory.set_url(tab, url).await,
            Self::DevTools(tabs) => tabs.set_url(tab, url).await,
        }
    }
}

/// Clipboard chosen from the configured strategy.
pub enum HostClipboard {
    /// The OS clipboard.
    System(SystemClipboard),
    /// The terminal, via OSC 52.
    Terminal(Osc52Clipboard),
    /// No clipboard.
    Unavailable,
}

impl HostClipboard {
    /// Builds the clipboard for a strategy.
    pub fn for_strategy(strategy: ClipboardStrategy) -> Self {
        match strategy {
            ClipboardStrategy::Native => Self::System(SystemClipboard::new()),
            ClipboardStrategy::Fallback => Self::Terminal(Osc52Clipboard::stdout()),
            ClipboardStrategy::Unavailable => Self::Unavailable,
        }
    }
}

impl ClipboardAccessor for HostClipboard {
    async fn write_text(&self, text: &str) -> ApplicationResult<()> {
        match self {
            Self::System(clipboard) => clipboard.write_text(text).await,
            Self::Terminal(clipboard) => clipboard.write_text(text).await,
            Self::Unavailable => Err(ApplicationError::ClipboardUnavailable),
        }
    }
}
