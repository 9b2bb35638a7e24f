//! Store
//!
//! [`BrowserStore`] owns the [`BrowserState`] and applies dispatched actions
//! under a write lock. It understands exactly the tab-list and engine actions
//! in [`crate::action`].

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::action::{BrowserAction, EngineAction, TabListAction};
use crate::state::BrowserState;

/// Anything actions can be dispatched to
pub trait Store: Send + Sync {
    fn dispatch(&self, action: BrowserAction);
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn dispatch(&self, action: BrowserAction) {
        (**self).dispatch(action)
    }
}

pub struct BrowserStore {
    state: Arc<RwLock<BrowserState>>,
}

impl BrowserStore {
    pub fn new() -> Self {
        Self::with_state(BrowserState::default())
    }

    pub fn with_state(initial: BrowserState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> BrowserState {
        self.state.read().clone()
    }

    pub fn tab_count(&self) -> usize {
        self.state.read().tabs.len()
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BrowserStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Store for BrowserStore {
    fn dispatch(&self, action: BrowserAction) {
        tracing::trace!(action = action.name(), tab_id = %action.tab_id(), "Dispatch");

        let mut state = self.state.write();
        match action {
            BrowserAction::TabList(action) => reduce_tab_list(&mut state, action),
            BrowserAction::Engine(action) => reduce_engine(&mut state, action),
        }
    }
}

fn reduce_tab_list(state: &mut BrowserState, action: TabListAction) {
    match action {
        TabListAction::AddTab { tab } => {
            if state.find_tab(&tab.id).is_some() {
                tracing::warn!(tab_id = %tab.id, "Ignoring tab with duplicate id");
                return;
            }

            if state.selected_tab_id.is_none() {
                state.selected_tab_id = Some(tab.id.clone());
            }

            tracing::debug!(tab_id = %tab.id, url = %tab.content.url, "Added tab");
            state.tabs.push(tab);
        }
        TabListAction::RemoveTab { tab_id } => {
            let Some(index) = state.tabs.iter().position(|t| t.id == tab_id) else {
                return;
            };

            state.tabs.remove(index);

            if state.selected_tab_id.as_deref() == Some(tab_id.as_str()) {
                // Prefer the tab that slid into the removed slot, then its left neighbour
                state.selected_tab_id = state
                    .tabs
                    .get(index)
                    .or_else(|| index.checked_sub(1).and_then(|i| state.tabs.get(i)))
                    .map(|t| t.id.clone());
            }

            tracing::debug!(tab_id = %tab_id, "Removed tab");
        }
    }
}

fn reduce_engine(state: &mut BrowserState, action: EngineAction) {
    match action {
        EngineAction::LinkEngineSession {
            tab_id,
            engine_session,
        } => {
            if let Some(tab) = state.find_tab_mut(&tab_id) {
                tab.engine_state.engine_session = Some(engine_session);
                tab.last_access = Utc::now();
                tracing::debug!(tab_id = %tab_id, "Linked engine session");
            }
        }
        EngineAction::UnlinkEngineSession { tab_id } => {
            if let Some(tab) = state.find_tab_mut(&tab_id) {
                tab.engine_state.engine_session = None;
                tracing::debug!(tab_id = %tab_id, "Unlinked engine session");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::TabSessionState;
    use lumen_engine::{
        EngineSession, EngineSessionState, LoadUrlFlags, Settings, TrackingProtectionPolicy,
    };
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct NoopSession {
        settings: Settings,
    }

    #[derive(Debug)]
    struct EmptyState;

    impl EngineSessionState for EmptyState {
        fn to_json(&self) -> serde_json::Value {
            serde_json::Value::Object(Default::default())
        }
    }

    impl EngineSession for NoopSession {
        fn load_url(
            &self,
            _url: &str,
            _parent: Option<&dyn EngineSession>,
            _flags: LoadUrlFlags,
            _additional_headers: Option<&HashMap<String, String>>,
        ) {
        }
        fn load_data(&self, _data: &str, _mime_type: &str, _encoding: &str) {}
        fn go_back(&self) {}
        fn go_forward(&self) {}
        fn reload(&self) {}
        fn stop_loading(&self) {}
        fn find_all(&self, _text: &str) {}
        fn find_next(&self, _forward: bool) {}
        fn clear_find_matches(&self) {}
        fn enable_tracking_protection(&self, _policy: &TrackingProtectionPolicy) {}
        fn disable_tracking_protection(&self) {}
        fn exit_full_screen_mode(&self) {}
        fn toggle_desktop_mode(&self, _enable: bool, _reload: bool) {}
        fn recover_from_crash(&self) -> bool {
            true
        }
        fn save_state(&self) -> Box<dyn EngineSessionState> {
            Box::new(EmptyState)
        }
        fn restore_state(&self, _state: &dyn EngineSessionState) -> bool {
            true
        }
        fn settings(&self) -> &Settings {
            &self.settings
        }
    }

    fn add(store: &BrowserStore, id: &str) {
        store.dispatch(
            TabListAction::AddTab {
                tab: TabSessionState::new(id, format!("https://{id}.example")),
            }
            .into(),
        );
    }

    fn remove(store: &BrowserStore, id: &str) {
        store.dispatch(
            TabListAction::RemoveTab {
                tab_id: id.to_string(),
            }
            .into(),
        );
    }

    #[test]
    fn test_add_tab_selects_first() {
        let store = BrowserStore::new();
        add(&store, "a");
        add(&store, "b");

        let state = store.state();
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.selected_tab_id.as_deref(), Some("a"));
        assert_eq!(state.find_tab("b").unwrap().url(), "https://b.example");
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let store = BrowserStore::new();
        add(&store, "a");
        add(&store, "a");
        assert_eq!(store.tab_count(), 1);
    }

    #[test]
    fn test_remove_selected_picks_neighbour() {
        let store = BrowserStore::new();
        add(&store, "a");
        add(&store, "b");
        add(&store, "c");

        // Removing the selected first tab selects the one that took its slot
        remove(&store, "a");
        assert_eq!(store.state().selected_tab_id.as_deref(), Some("b"));

        add(&store, "d");
        remove(&store, "c");
        remove(&store, "d");
        assert_eq!(store.state().selected_tab_id.as_deref(), Some("b"));

        remove(&store, "b");
        let state = store.state();
        assert!(state.tabs.is_empty());
        assert!(state.selected_tab_id.is_none());
    }

    #[test]
    fn test_remove_last_selected_picks_previous() {
        let store = BrowserStore::with_state(BrowserState {
            tabs: vec![
                TabSessionState::new("a", "about:blank"),
                TabSessionState::new("b", "about:blank"),
            ],
            selected_tab_id: Some("b".to_string()),
        });

        remove(&store, "b");
        assert_eq!(store.state().selected_tab_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_remove_unknown_tab_is_noop() {
        let store = BrowserStore::new();
        add(&store, "a");
        remove(&store, "missing");

        let state = store.state();
        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.selected_tab_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_link_and_unlink() {
        let store = BrowserStore::new();
        add(&store, "a");

        store.dispatch(
            EngineAction::LinkEngineSession {
                tab_id: "a".to_string(),
                engine_session: Arc::new(NoopSession::default()),
            }
            .into(),
        );
        assert!(store.state().find_tab("a").unwrap().engine_state.is_linked());

        store.dispatch(
            EngineAction::UnlinkEngineSession {
                tab_id: "a".to_string(),
            }
            .into(),
        );
        assert!(!store.state().find_tab("a").unwrap().engine_state.is_linked());
    }

    #[test]
    fn test_link_updates_last_access() {
        let mut tab = TabSessionState::new("a", "about:blank");
        let stale = Utc::now() - chrono::Duration::hours(1);
        tab.last_access = stale;

        let store = BrowserStore::with_state(BrowserState {
            tabs: vec![tab],
            selected_tab_id: Some("a".to_string()),
        });

        store.dispatch(
            EngineAction::LinkEngineSession {
                tab_id: "a".to_string(),
                engine_session: Arc::new(NoopSession::default()),
            }
            .into(),
        );

        let state = store.state();
        let tab = state.find_tab("a").unwrap();
        assert!(tab.last_access > stale);
    }

    #[test]
    fn test_unlink_unknown_tab_is_noop() {
        let store = BrowserStore::new();
        add(&store, "a");
        store.dispatch(
            EngineAction::LinkEngineSession {
                tab_id: "a".to_string(),
                engine_session: Arc::new(NoopSession::default()),
            }
            .into(),
        );

        store.dispatch(
            EngineAction::UnlinkEngineSession {
                tab_id: "ghost".to_string(),
            }
            .into(),
        );

        let state = store.state();
        assert_eq!(state.tabs.len(), 1);
        assert_eq!(state.selected_tab_id.as_deref(), Some("a"));
        assert!(state.find_tab("a").unwrap().engine_state.is_linked());
    }

    #[test]
    fn test_link_unknown_tab_is_noop() {
        let store = BrowserStore::new();
        store.dispatch(
            EngineAction::LinkEngineSession {
                tab_id: "ghost".to_string(),
                engine_session: Arc::new(NoopSession::default()),
            }
            .into(),
        );
        assert_eq!(store.tab_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let store = BrowserStore::new();
        let other = store.clone();
        add(&other, "a");
        assert_eq!(store.tab_count(), 1);
    }
}
