//! Persisted engine session state

/// Opaque engine state captured by [`EngineSession::save_state`](crate::EngineSession::save_state)
/// and handed back to [`EngineSession::restore_state`](crate::EngineSession::restore_state).
pub trait EngineSessionState: Send + Sync + std::fmt::Debug {
    /// Serialize into a JSON value suitable for writing to disk
    fn to_json(&self) -> serde_json::Value;
}
