//! reqwest-backed JSON fetcher

use log::{debug, warn};
use reqwest::blocking::Client as HttpClient;
use serde_json::Value;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// User agent sent with every request; GitHub refuses requests without one.
const USER_AGENT: &str = concat!("ghorg/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP fetcher.
///
/// No timeout is configured here, so the transport's default applies.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: HttpClient,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh HTTP client
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.http.get(url).send().map_err(ApiError::from)?;

        // Status is not interpreted; the body is decoded whatever it is.
        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
        }

        let body = response.text().map_err(ApiError::from)?;
        let value = serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpFetcher::new().is_ok());
    }

    #[test]
    fn test_get_json_returns_decoded_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/payload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"payload": true}"#)
            .expect(1)
            .create();

        let fetcher = HttpFetcher::new().unwrap();
        let value = fetcher
            .get_json(&format!("{}/payload", server.url()))
            .unwrap();

        assert_eq!(value, json!({"payload": true}));
        mock.assert();
    }

    #[test]
    fn test_get_json_one_request_per_call() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/payload")
            .with_status(200)
            .with_body(r#"{"payload": false}"#)
            .expect(2)
            .create();

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("{}/payload", server.url());
        fetcher.get_json(&url).unwrap();
        fetcher.get_json(&url).unwrap();

        mock.assert();
    }

    #[test]
    fn test_get_json_accepts_any_top_level_value() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/list")
            .with_status(200)
            .with_body(r#"[1, "two", null]"#)
            .create();

        let fetcher = HttpFetcher::new().unwrap();
        let value = fetcher.get_json(&format!("{}/list", server.url())).unwrap();

        assert_eq!(value, json!([1, "two", null]));
    }

    #[test]
    fn test_get_json_decodes_error_status_bodies() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/orgs/missing")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create();

        let fetcher = HttpFetcher::new().unwrap();
        let value = fetcher
            .get_json(&format!("{}/orgs/missing", server.url()))
            .unwrap();

        assert_eq!(value, json!({"message": "Not Found"}));
    }

    #[test]
    fn test_get_json_non_json_body_is_decode_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/html")
            .with_status(200)
            .with_body("<html></html>")
            .create();

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("{}/html", server.url());
        let err = fetcher.get_json(&url).unwrap_err();

        match err {
            Error::Api(ApiError::Decode { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("Expected ApiError::Decode, got {other:?}"),
        }
    }

    #[test]
    fn test_get_json_transport_error_propagates() {
        let fetcher = HttpFetcher::new().unwrap();
        // Port 1 is reserved and refuses connections.
        let err = fetcher.get_json("http://127.0.0.1:1/").unwrap_err();

        match err {
            Error::Api(ApiError::Transport(e)) => assert!(e.is_connect() || e.is_request()),
            other => panic!("Expected ApiError::Transport, got {other:?}"),
        }
    }
}
