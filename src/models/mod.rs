//! Display models for CLI output
//!
//! Converts raw GitHub payloads into rows and summaries the CLI can print.

pub mod display;

pub use display::{OrgSummary, RepoDisplay};
