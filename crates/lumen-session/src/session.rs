//! Browsing session as seen by the engine layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, also used as the tab id in the store
    id: String,
    /// Location currently shown, may be empty before the first load
    current_uri: String,
}

impl Session {
    pub fn new(current_uri: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), current_uri)
    }

    pub fn with_id(id: impl Into<String>, current_uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_uri: current_uri.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_uri(&self) -> &str {
        &self.current_uri
    }

    /// Record a new location
    pub fn navigate(&mut self, uri: impl Into<String>) {
        self.current_uri = uri.into();
    }
}
