//! Plain fakes for the platform ports.

use std::cell::{Cell, RefCell};

use querylens_domain::{Capabilities, EditorSettings};

use super::ParamEditor;
use crate::ports::{
    ActiveTab, ClipboardAccessor, Notification, Notifier, TabAccessor, TabId,
};
use crate::{ApplicationError, ApplicationResult};

#[derive(Debug, Default)]
pub struct FakeTabs {
    tab: ActiveTab,
    fail_query: bool,
    fail_next_set: Cell<bool>,
    replaces_tab: bool,
    pub navigations: RefCell<Vec<(TabId, String)>>,
}

impl FakeTabs {
    pub fn new(url: &str) -> Self {
        Self {
            tab: ActiveTab {
                id: Some(TabId::from(7)),
                url: Some(url.to_string()),
            },
            ..Self::default()
        }
    }

    pub fn without_id(url: &str) -> Self {
        Self {
            tab: ActiveTab {
                id: None,
                url: Some(url.to_string()),
            },
            ..Self::default()
        }
    }

    pub fn without_url() -> Self {
        Self {
            tab: ActiveTab {
                id: Some(TabId::from(7)),
                url: None,
            },
            ..Self::default()
        }
    }

    /// A tab whose navigation opens a replacement page with a new id.
    pub fn replacing(url: &str) -> Self {
        Self {
            replaces_tab: true,
            ..Self::new(url)
        }
    }

    pub fn failing_query() -> Self {
        Self {
            fail_query: true,
            ..Self::default()
        }
    }

    pub fn fail_next_set(&self) {
        self.fail_next_set.set(true);
    }
}

impl TabAccessor for FakeTabs {
    async fn active_tab(&self) -> ApplicationResult<ActiveTab> {
        if self.fail_query {
            return Err(ApplicationError::PlatformCall("tabs.query rejected".into()));
        }
        Ok(self.tab.clone())
    }

    async fn set_url(&self, tab: &TabId, url: &str) -> ApplicationResult<TabId> {
        if self.fail_next_set.replace(false) {
            return Err(ApplicationError::PlatformCall("tabs.update rejected".into()));
        }
        let mut navigations = self.navigations.borrow_mut();
        navigations.push((tab.clone(), url.to_string()));
        if self.replaces_tab {
            Ok(TabId::new(format!("{tab}-{}", navigations.len())))
        } else {
            Ok(tab.clone())
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeClipboard {
    fail: bool,
    pub written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ClipboardAccessor for FakeClipboard {
    async fn write_text(&self, text: &str) -> ApplicationResult<()> {
        if self.fail {
            return Err(ApplicationError::Clipboard("write denied".into()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

pub type TestEditor = ParamEditor<FakeTabs, FakeClipboard, RecordingNotifier>;

pub fn editor(url: &str) -> TestEditor {
    editor_with(
        FakeTabs::new(url),
        FakeClipboard::default(),
        Capabilities::popup(),
        EditorSettings::default(),
    )
}

pub fn editor_with(
    tabs: FakeTabs,
    clipboard: FakeClipboard,
    capabilities: Capabilities,
    settings: EditorSettings,
) -> TestEditor {
    ParamEditor::new(
        tabs,
        clipboard,
        RecordingNotifier::default(),
        capabilities,
        settings,
    )
}
