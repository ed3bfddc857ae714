//! Mock JSON fetcher for testing
//!
//! Serves canned payloads per URL and records every request so tests can
//! assert how many times the transport was hit.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// Mock fetcher for testing.
///
/// # Example
/// ```ignore
/// let mock = MockFetcher::new().with_payload("https://x/orgs/google", json!({"repos_url": "U"}));
/// let client = GithubOrgClient::with_fetcher("google", &mock);
/// client.org()?;
/// assert_eq!(mock.calls_to("https://x/orgs/google"), 1);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// URL -> payload returned by get_json
    payloads: Mutex<HashMap<String, Value>>,
    /// Error to return (if any) - consumed on first use
    error: Mutex<Option<ApiError>>,
    /// Every URL requested, in order
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `url`
    pub fn with_payload(self, url: impl Into<String>, payload: Value) -> Self {
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.insert(url.into(), payload);
        }
        self
    }

    /// Fail the next request with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        if let Ok(mut slot) = self.error.lock() {
            *slot = Some(error);
        }
        self
    }

    /// All requested URLs in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Total number of requests made
    pub fn call_count(&self) -> usize {
        self.requests().len()
    }

    /// Number of requests made to `url`
    pub fn calls_to(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| *u == url).count()
    }
}

impl JsonFetcher for MockFetcher {
    fn get_json(&self, url: &str) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        if let Some(err) = self.error.lock().ok().and_then(|mut e| e.take()) {
            return Err(err.into());
        }

        // Unknown URLs answer null, like an endpoint with an empty body would
        // after decoding.
        let payloads = self.payloads.lock().map_err(|e| {
            crate::error::Error::Other(format!("mock fetcher poisoned: {e}"))
        })?;
        Ok(payloads.get(url).cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_serves_payload_and_counts() {
        let mock = MockFetcher::new().with_payload("http://example.com", json!({"payload": true}));

        assert_eq!(
            mock.get_json("http://example.com").unwrap(),
            json!({"payload": true})
        );
        assert_eq!(mock.get_json("http://holberton.io").unwrap(), Value::Null);

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.calls_to("http://example.com"), 1);
    }

    #[test]
    fn test_mock_error_is_consumed_once() {
        let mock = MockFetcher::new().with_error(ApiError::MissingKey("x".to_string()));

        assert!(mock.get_json("http://example.com").is_err());
        assert!(mock.get_json("http://example.com").is_ok());
    }
}
