//! In-memory tab adapter.
//!
//! Backs the editor when the URL comes from the command line instead of a
//! browser, and doubles as a test fake.

use std::sync::Mutex;

use querylens_application::ports::{ActiveTab, TabAccessor, TabId};
use querylens_application::{ApplicationError, ApplicationResult};

#[derive(Debug, Default)]
struct TabState {
    tab: ActiveTab,
    navigations: Vec<String>,
    fail_next: bool,
}

/// A single tab held in memory.
#[derive(Debug, Default)]
pub struct InMemoryTab {
    state: Mutex<TabState>,
}

impl InMemoryTab {
    /// Creates a tab with the given id and URL.
    #[must_use]
    pub fn new(id: Option<TabId>, url: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(TabState {
                tab: ActiveTab {
                    id,
                    url: Some(url.into()),
                },
                ..TabState::default()
            }),
        }
    }

    /// Returns the tab's current URL.
    #[must_use]
    pub fn current_url(&self) -> Option<String> {
        self.with_state(|s| s.tab.url.clone())
    }

    /// Returns every URL the tab was navigated to, oldest first.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.with_state(|s| s.navigations.clone())
    }

    /// Makes the next navigation fail once.
    pub fn fail_next_navigation(&self) {
        self.with_state(|s| s.fail_next = true);
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut TabState) -> R) -> R {
        let mut guard = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TabAccessor for InMemoryTab {
    async fn active_tab(&self) -> ApplicationResult<ActiveTab> {
        Ok(self.with_state(|s| s.tab.clone()))
    }

    async fn set_url(&self, tab: &TabId, url: &str) -> ApplicationResult<TabId> {
        self.with_state(|s| {
            if std::mem::take(&mut s.fail_next) {
                return Err(ApplicationError::PlatformCall(
                    "navigation rejected".to_string(),
                ));
            }
            if s.tab.id.as_ref() != Some(tab) {
                return Err(ApplicationError::PlatformCall(format!("no tab with id {tab}")));
            }
            s.tab.url = Some(url.to_string());
            s.navigations.push(url.to_string());
            Ok(tab.clone())
        })
    }
}
