//! Fetch abstraction
//!
//! Minimal request/response model the uploader speaks, so the transport can
//! be swapped without touching upload logic.

use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Request {
    pub fn new(url: Url, method: Method) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
}

/// Transport able to execute a [`Request`]
pub trait FetchClient: Send + Sync {
    fn fetch(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_maps_to_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut request = Request::new(Url::parse("https://example.com").unwrap(), Method::Post);
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("date"), None);
    }
}
