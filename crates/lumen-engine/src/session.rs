//! Engine session capability interface
//!
//! Everything the state store may ask of a live engine session. The store
//! holds sessions as `Arc<dyn EngineSession>`, so every method takes `&self`.

use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;

use crate::settings::Settings;
use crate::state::EngineSessionState;
use crate::tracking::TrackingProtectionPolicy;

/// Flags modifying how a URL load is performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadUrlFlags(u32);

impl LoadUrlFlags {
    pub const NONE: LoadUrlFlags = LoadUrlFlags(0);
    pub const BYPASS_CACHE: LoadUrlFlags = LoadUrlFlags(1 << 0);
    pub const BYPASS_PROXY: LoadUrlFlags = LoadUrlFlags(1 << 1);
    pub const EXTERNAL: LoadUrlFlags = LoadUrlFlags(1 << 2);
    pub const ALLOW_POPUPS: LoadUrlFlags = LoadUrlFlags(1 << 3);
    pub const BYPASS_CLASSIFIER: LoadUrlFlags = LoadUrlFlags(1 << 4);
    pub const ALLOW_ADDITIONAL_HEADERS: LoadUrlFlags = LoadUrlFlags(1 << 5);
}

impl BitOr for LoadUrlFlags {
    type Output = LoadUrlFlags;

    fn bitor(self, rhs: LoadUrlFlags) -> LoadUrlFlags {
        LoadUrlFlags(self.0 | rhs.0)
    }
}

pub trait EngineSession: Send + Sync + fmt::Debug {
    /// Load `url`, optionally on behalf of `parent`
    fn load_url(
        &self,
        url: &str,
        parent: Option<&dyn EngineSession>,
        flags: LoadUrlFlags,
        additional_headers: Option<&HashMap<String, String>>,
    );

    /// Load raw `data` as a document
    fn load_data(&self, data: &str, mime_type: &str, encoding: &str);

    fn go_back(&self);

    fn go_forward(&self);

    fn reload(&self);

    fn stop_loading(&self);

    /// Highlight every match of `text` on the page
    fn find_all(&self, text: &str);

    fn find_next(&self, forward: bool);

    fn clear_find_matches(&self);

    fn enable_tracking_protection(&self, policy: &TrackingProtectionPolicy);

    fn disable_tracking_protection(&self);

    fn exit_full_screen_mode(&self);

    fn toggle_desktop_mode(&self, enable: bool, reload: bool);

    /// Try to bring a crashed session back; returns whether it worked
    fn recover_from_crash(&self) -> bool;

    fn save_state(&self) -> Box<dyn EngineSessionState>;

    /// Apply previously saved state; returns whether it was applied
    fn restore_state(&self, state: &dyn EngineSessionState) -> bool;

    fn settings(&self) -> &Settings;
}
