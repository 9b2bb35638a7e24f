//! Ping uploader
//!
//! The telemetry pipeline owns scheduling, retries and persistence. An
//! uploader only performs one HTTP submission and reports how it went.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;
use crate::fetch::{FetchClient, Method, Request};
use crate::lazy::LazyClient;

pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(30_000);

/// A finished ping ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingUploadRequest {
    pub url: String,
    pub body: Vec<u8>,
    pub headers: HashMap<String, String>,
}

impl PingUploadRequest {
    pub fn new(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            body,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadResult {
    /// The server answered; what the code means is the pipeline's call
    HttpStatus { code: u16 },
    /// Worth retrying later (network down, client unavailable)
    RecoverableFailure,
    /// Retrying the same request will never work
    UnrecoverableFailure,
}

impl UploadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadResult::HttpStatus { code } if (200..300).contains(code))
    }
}

pub trait PingUploader: Send + Sync {
    fn upload(&self, request: PingUploadRequest) -> impl Future<Output = UploadResult> + Send;
}

/// [`PingUploader`] that submits through a lazily built [`FetchClient`]
#[derive(Debug)]
pub struct FetchHttpUploader<C> {
    client: LazyClient<C>,
}

impl<C: FetchClient> FetchHttpUploader<C> {
    pub fn new(client: LazyClient<C>) -> Self {
        Self { client }
    }

    /// Whether the underlying client has been built yet
    pub fn client_initialized(&self) -> bool {
        self.client.is_initialized()
    }

    fn build_request(&self, ping: PingUploadRequest) -> Result<Request, FetchError> {
        let url = Url::parse(&ping.url).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        let mut request = Request::new(url, Method::Post);
        request.headers = ping.headers.into_iter().collect();
        request.body = Some(ping.body);
        request.connect_timeout = DEFAULT_CONNECTION_TIMEOUT;
        request.read_timeout = DEFAULT_READ_TIMEOUT;

        Ok(request)
    }
}

impl<C: FetchClient> PingUploader for FetchHttpUploader<C> {
    async fn upload(&self, ping: PingUploadRequest) -> UploadResult {
        let request = match self.build_request(ping) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping ping with malformed request");
                return UploadResult::UnrecoverableFailure;
            }
        };

        let client = match self.client.get() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "Fetch client unavailable");
                return UploadResult::RecoverableFailure;
            }
        };

        tracing::debug!(url = %request.url, "Submitting ping");

        match client.fetch(request).await {
            Ok(response) => UploadResult::HttpStatus {
                code: response.status,
            },
            Err(FetchError::InvalidRequest(e)) => {
                tracing::warn!(error = %e, "Ping rejected by fetch client");
                UploadResult::UnrecoverableFailure
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error while uploading ping");
                UploadResult::RecoverableFailure
            }
        }
    }
}
