//! reqwest-backed fetch client

use crate::context::PlatformContext;
use crate::error::FetchError;
use crate::fetch::{FetchClient, Request, Response};
use crate::uploader::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_READ_TIMEOUT};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ReqwestFetchClient {
    client: reqwest::Client,
}

impl ReqwestFetchClient {
    pub fn new(context: &PlatformContext) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(context.user_agent())
            .connect_timeout(DEFAULT_CONNECTION_TIMEOUT)
            .read_timeout(DEFAULT_READ_TIMEOUT);

        if !context.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;

        tracing::debug!(app_id = %context.app_id, "Built fetch client");

        Ok(Self { client })
    }
}

impl FetchClient for ReqwestFetchClient {
    async fn fetch(&self, request: Request) -> Result<Response> {
        // Client-wide connect/read timeouts still apply; this is the overall deadline
        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .timeout(request.connect_timeout + request.read_timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        Ok(Response {
            status: response.status().as_u16(),
        })
    }
}
