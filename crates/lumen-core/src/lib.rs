//! Lumen Core
//!
//! Composition root for the browser shell. [`Components`] owns the single
//! state store and hands it to everything that dispatches into it.

mod components;
mod config;
mod error;

pub use components::Components;
pub use config::Config;
pub use error::CoreError;

// Re-export bridged components
pub use lumen_engine::{
    EngineHandle, EngineSession, EngineSessionState, LoadUrlFlags, Settings,
    TrackingProtectionPolicy,
};
pub use lumen_session::{NativeEngineSession, PlaceholderEngineState, Session, SessionRegistrar};
pub use lumen_state::{
    BrowserAction, BrowserState, BrowserStore, EngineAction, Store, TabListAction,
    TabSessionState,
};
pub use lumen_telemetry::{
    FetchError, FetchHttpUploader, PingUploadRequest, PingUploader, PlatformContext,
    ReqwestFetchClient, UploadResult, UploaderFactory,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
