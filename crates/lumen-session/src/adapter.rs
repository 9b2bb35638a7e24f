//! Engine session adapter
//!
//! Wraps a native [`EngineHandle`] so it can be linked into the store as an
//! [`EngineSession`]. Only URL loads reach the engine. Every other capability
//! is answered here: navigation, find, tracking protection, full screen and
//! desktop mode do nothing; crash recovery and state restore report success;
//! saved state is always [`PlaceholderEngineState`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use lumen_engine::{
    EngineHandle, EngineSession, EngineSessionState, LoadUrlFlags, Settings,
    TrackingProtectionPolicy,
};

/// Saved engine state carrying no data. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderEngineState {}

impl EngineSessionState for PlaceholderEngineState {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({})
    }
}

#[derive(Debug)]
pub struct NativeEngineSession {
    handle: Arc<dyn EngineHandle>,
    settings: Settings,
}

impl NativeEngineSession {
    pub fn new(handle: Arc<dyn EngineHandle>) -> Self {
        Self {
            handle,
            settings: Settings::default(),
        }
    }
}

impl EngineSession for NativeEngineSession {
    fn load_url(
        &self,
        url: &str,
        _parent: Option<&dyn EngineSession>,
        _flags: LoadUrlFlags,
        _additional_headers: Option<&HashMap<String, String>>,
    ) {
        self.handle.load_uri(url);
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
        Box::new(PlaceholderEngineState::default())
    }

    fn restore_state(&self, _state: &dyn EngineSessionState) -> bool {
        true
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }
}
