//! Single-request JSON fetching

use serde_json::Value;

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpFetcher;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockFetcher;

/// Fetches a URL and decodes its body as JSON.
///
/// Implementations issue exactly one request per call and never cache.
/// Transport errors are returned as-is; a body that is not JSON is a decode
/// error.
pub trait JsonFetcher {
    /// GET `url` and return the decoded body
    fn get_json(&self, url: &str) -> Result<Value>;
}

impl<F: JsonFetcher + ?Sized> JsonFetcher for &F {
    fn get_json(&self, url: &str) -> Result<Value> {
        (**self).get_json(url)
    }
}
