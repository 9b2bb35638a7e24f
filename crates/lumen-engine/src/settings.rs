//! Per-session engine settings

use serde::{Deserialize, Serialize};

/// Engine settings overrides.
///
/// `None` means "leave the engine default alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub javascript_enabled: Option<bool>,
    pub dom_storage_enabled: Option<bool>,
    pub user_agent_string: Option<String>,
    pub tracking_protection_policy: Option<crate::TrackingProtectionPolicy>,
    pub media_playback_requires_user_gesture: Option<bool>,
    pub suspend_media_when_inactive: Option<bool>,
}

impl Settings {
    /// True when no field overrides an engine default
    pub fn is_empty(&self) -> bool {
        *self == Settings::default()
    }
}
