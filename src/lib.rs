//! ghorg - GitHub organization client
//!
//! Building blocks:
//! - [`nested::access_nested_map`] walks nested JSON objects by key path
//! - [`fetch::JsonFetcher`] performs one GET and decodes the JSON body
//! - [`memo::Memoized`] caches a zero-argument property per instance
//! - [`client::GithubOrgClient`] combines them to list an organization's
//!   repositories, optionally filtered by license

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod memo;
pub mod models;
pub mod nested;
pub mod output;

pub use client::GithubOrgClient;
pub use error::{ApiError, ConfigError, Error, Result};
pub use fetch::{HttpFetcher, JsonFetcher};
pub use memo::Memoized;
pub use nested::access_nested_map;
