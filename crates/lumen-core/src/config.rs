//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use lumen_telemetry::PlatformContext;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application identifier reported to the telemetry server
    pub app_id: String,
    pub app_version: String,
    /// Overrides the `app_id/app_version` user agent on uploads
    pub user_agent: Option<String>,
    /// Base URL pings are submitted under
    pub server_endpoint: String,
    pub use_system_proxy: bool,
}

impl Config {
    /// Load a JSON config file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.as_ref().display(), "Loaded configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(CoreError::Config("app_id cannot be empty".to_string()));
        }

        Url::parse(&self.server_endpoint).map_err(|e| {
            CoreError::Config(format!(
                "invalid server_endpoint {:?}: {}",
                self.server_endpoint, e
            ))
        })?;

        Ok(())
    }

    pub fn platform_context(&self) -> PlatformContext {
        let mut context = PlatformContext::new(self.app_id.clone(), self.app_version.clone());
        context.user_agent = self.user_agent.clone();
        context.use_system_proxy = self.use_system_proxy;
        context
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: "org.lumen.browser".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user_agent: None,
            server_endpoint: "https://incoming.telemetry.mozilla.org".to_string(),
            use_system_proxy: true,
        }
    }
}
