//! Platform context
//!
//! Identity of the embedding application, used to configure network clients.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformContext {
    /// Application identifier, e.g. `org.lumen.browser`
    pub app_id: String,
    pub app_version: String,
    /// Overrides the derived `app_id/app_version` user agent
    pub user_agent: Option<String>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

fn default_use_system_proxy() -> bool {
    true
}

impl PlatformContext {
    pub fn new(app_id: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_version: app_version.into(),
            user_agent: None,
            use_system_proxy: true,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.app_id, self.app_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        let context = PlatformContext::new("org.lumen.browser", "1.2.0");
        assert_eq!(context.user_agent(), "org.lumen.browser/1.2.0");

        let context = context.with_user_agent("Custom/9");
        assert_eq!(context.user_agent(), "Custom/9");
    }

    #[test]
    fn test_deserialize_defaults_to_system_proxy() {
        let context: PlatformContext =
            serde_json::from_str(r#"{"app_id":"org.lumen.browser","app_version":"1.0"}"#).unwrap();
        assert!(context.use_system_proxy);
        assert!(context.user_agent.is_none());
    }
}
