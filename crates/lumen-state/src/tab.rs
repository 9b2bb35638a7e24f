//! Tab state as tracked by the store

use chrono::{DateTime, Utc};
use std::sync::Arc;

use lumen_engine::EngineSession;

/// What the tab is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    pub url: String,
    pub title: String,
    pub loading: bool,
}

/// Engine attachment for a tab
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    /// Live engine session, `None` while unlinked
    pub engine_session: Option<Arc<dyn EngineSession>>,
}

impl EngineState {
    pub fn is_linked(&self) -> bool {
        self.engine_session.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct TabSessionState {
    pub id: String,
    pub content: ContentState,
    pub engine_state: EngineState,
    pub created_at: DateTime<Utc>,
    /// Last time the tab was selected or linked
    pub last_access: DateTime<Utc>,
}

impl TabSessionState {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: id.into(),
            content: ContentState {
                url: url.into(),
                ..ContentState::default()
            },
            engine_state: EngineState::default(),
            created_at: now,
            last_access: now,
        }
    }

    pub fn url(&self) -> &str {
        &self.content.url
    }
}

/// Create the tab the store tracks for an externally owned session
pub fn create_tab(id: impl Into<String>, url: impl Into<String>) -> TabSessionState {
    TabSessionState::new(id, url)
}
