//! Browser state snapshot

use crate::tab::TabSessionState;

#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Tabs in display order
    pub tabs: Vec<TabSessionState>,
    pub selected_tab_id: Option<String>,
}

impl BrowserState {
    pub fn find_tab(&self, tab_id: &str) -> Option<&TabSessionState> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub(crate) fn find_tab_mut(&mut self, tab_id: &str) -> Option<&mut TabSessionState> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }
}
