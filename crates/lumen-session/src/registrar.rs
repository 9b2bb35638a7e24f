//! Session Registrar
//!
//! Translates session lifecycle and engine attachment events into store
//! dispatches. It keeps no state of its own and performs no checks: whether a
//! tab id is known, or already linked, is for the store to decide.

use std::sync::Arc;

use lumen_engine::EngineHandle;
use lumen_state::{create_tab, BrowserStore, EngineAction, Store, TabListAction, TabSessionState};

use crate::adapter::NativeEngineSession;
use crate::session::Session;

pub struct SessionRegistrar<S: Store = BrowserStore> {
    store: Arc<S>,
}

impl<S: Store> SessionRegistrar<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Start tracking `session` as a tab
    pub fn add_session(&self, session: &Session) {
        tracing::debug!(tab_id = %session.id(), url = %session.current_uri(), "Registering session");

        self.store.dispatch(
            TabListAction::AddTab {
                tab: to_tab_session_state(session),
            }
            .into(),
        );
    }

    /// Stop tracking `session`
    pub fn remove_session(&self, session: &Session) {
        tracing::debug!(tab_id = %session.id(), "Unregistering session");

        self.store.dispatch(
            TabListAction::RemoveTab {
                tab_id: session.id().to_string(),
            }
            .into(),
        );
    }

    /// Attach a live engine to the tab `tab_id`
    pub fn link(&self, tab_id: &str, handle: Arc<dyn EngineHandle>) {
        tracing::debug!(tab_id = %tab_id, "Linking engine session");

        self.store.dispatch(
            EngineAction::LinkEngineSession {
                tab_id: tab_id.to_string(),
                engine_session: Arc::new(NativeEngineSession::new(handle)),
            }
            .into(),
        );
    }

    pub fn unlink(&self, tab_id: &str) {
        tracing::debug!(tab_id = %tab_id, "Unlinking engine session");

        self.store.dispatch(
            EngineAction::UnlinkEngineSession {
                tab_id: tab_id.to_string(),
            }
            .into(),
        );
    }
}

impl<S: Store> Clone for SessionRegistrar<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn to_tab_session_state(session: &Session) -> TabSessionState {
    create_tab(session.id(), session.current_uri())
}
