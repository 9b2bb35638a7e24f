//! Uploader factory

use crate::client::ReqwestFetchClient;
use crate::context::PlatformContext;
use crate::lazy::LazyClient;
use crate::uploader::FetchHttpUploader;

pub struct UploaderFactory;

impl UploaderFactory {
    /// Build an uploader for `context`.
    ///
    /// Returns immediately: the reqwest client is created on the first upload.
    pub fn create(context: &PlatformContext) -> FetchHttpUploader<ReqwestFetchClient> {
        let context = context.clone();
        FetchHttpUploader::new(LazyClient::new(move || ReqwestFetchClient::new(&context)))
    }
}
