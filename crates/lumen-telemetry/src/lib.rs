//! Lumen Telemetry Upload
//!
//! HTTP transport for the telemetry pipeline. The pipeline hands finished
//! pings to a [`PingUploader`]; [`UploaderFactory::create`] builds one backed
//! by a reqwest client that is only constructed when the first ping goes out.

mod client;
mod context;
mod error;
mod factory;
mod fetch;
mod lazy;
mod uploader;

pub use client::ReqwestFetchClient;
pub use context::PlatformContext;
pub use error::FetchError;
pub use factory::UploaderFactory;
pub use fetch::{FetchClient, Method, Request, Response};
pub use lazy::LazyClient;
pub use uploader::{FetchHttpUploader, PingUploadRequest, PingUploader, UploadResult};

pub type Result<T> = std::result::Result<T, FetchError>;
