//! Application components
//!
//! Built once at startup. Everything that dispatches into the store gets it
//! through here, so there is exactly one store per running shell.

use chrono::Utc;
use std::sync::Arc;
use url::Url;

use lumen_session::SessionRegistrar;
use lumen_state::BrowserStore;
use lumen_telemetry::{
    FetchHttpUploader, PingUploadRequest, PingUploader, ReqwestFetchClient, UploadResult,
    UploaderFactory,
};

use crate::config::Config;

pub struct Components {
    config: Config,
    store: Arc<BrowserStore>,
    registrar: SessionRegistrar<BrowserStore>,
    uploader: FetchHttpUploader<ReqwestFetchClient>,
}

impl Components {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(BrowserStore::new());
        let registrar = SessionRegistrar::new(Arc::clone(&store));
        let uploader = UploaderFactory::create(&config.platform_context());

        tracing::info!(
            app_id = %config.app_id,
            server_endpoint = %config.server_endpoint,
            "Initialized components"
        );

        Self {
            config,
            store,
            registrar,
            uploader,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<BrowserStore> {
        &self.store
    }

    pub fn registrar(&self) -> &SessionRegistrar<BrowserStore> {
        &self.registrar
    }

    pub fn uploader(&self) -> &FetchHttpUploader<ReqwestFetchClient> {
        &self.uploader
    }

    /// Submit a JSON ping body to `path` under the configured endpoint
    pub async fn submit_ping(&self, path: &str, body: Vec<u8>) -> UploadResult {
        let url = match Url::parse(&self.config.server_endpoint).and_then(|base| base.join(path)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Cannot build ping URL");
                return UploadResult::UnrecoverableFailure;
            }
        };

        let request = PingUploadRequest::new(url.to_string(), body)
            .with_header("Content-Type", "application/json; charset=utf-8")
            .with_header(
                "Date",
                Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            );

        self.uploader.upload(request).await
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
