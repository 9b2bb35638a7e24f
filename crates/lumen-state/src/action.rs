//! Actions accepted by the store

use std::sync::Arc;

use lumen_engine::EngineSession;

use crate::tab::TabSessionState;

#[derive(Debug, Clone)]
pub enum TabListAction {
    /// Append a tab to the tab list
    AddTab { tab: TabSessionState },
    /// Drop a tab from the tab list
    RemoveTab { tab_id: String },
}

#[derive(Debug, Clone)]
pub enum EngineAction {
    /// Attach a live engine session to a tab
    LinkEngineSession {
        tab_id: String,
        engine_session: Arc<dyn EngineSession>,
    },
    /// Detach whatever engine session the tab holds
    UnlinkEngineSession { tab_id: String },
}

#[derive(Debug, Clone)]
pub enum BrowserAction {
    TabList(TabListAction),
    Engine(EngineAction),
}

impl BrowserAction {
    /// Id of the tab this action targets
    pub fn tab_id(&self) -> &str {
        match self {
            BrowserAction::TabList(TabListAction::AddTab { tab }) => &tab.id,
            BrowserAction::TabList(TabListAction::RemoveTab { tab_id }) => tab_id,
            BrowserAction::Engine(EngineAction::LinkEngineSession { tab_id, .. }) => tab_id,
            BrowserAction::Engine(EngineAction::UnlinkEngineSession { tab_id }) => tab_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BrowserAction::TabList(TabListAction::AddTab { .. }) => "add_tab",
            BrowserAction::TabList(TabListAction::RemoveTab { .. }) => "remove_tab",
            BrowserAction::Engine(EngineAction::LinkEngineSession { .. }) => {
                "link_engine_session"
            }
            BrowserAction::Engine(EngineAction::UnlinkEngineSession { .. }) => {
                "unlink_engine_session"
            }
        }
    }
}

impl From<TabListAction> for BrowserAction {
    fn from(action: TabListAction) -> Self {
        BrowserAction::TabList(action)
    }
}

impl From<EngineAction> for BrowserAction {
    fn from(action: EngineAction) -> Self {
        BrowserAction::Engine(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_targets() {
        let add: BrowserAction = TabListAction::AddTab {
            tab: TabSessionState::new("tab-1", "https://example.com"),
        }
        .into();
        assert_eq!(add.tab_id(), "tab-1");
        assert_eq!(add.name(), "add_tab");

        let unlink: BrowserAction = EngineAction::UnlinkEngineSession {
            tab_id: "tab-2".to_string(),
        }
        .into();
        assert_eq!(unlink.tab_id(), "tab-2");
        assert_eq!(unlink.name(), "unlink_engine_session");
    }
}
