//! Command execution context
//!
//! Loads configuration once and resolves the settings every command needs.

use log::debug;

use ghorg::GithubOrgClient;
use ghorg::config::Config;
use ghorg::error::Result;
use ghorg::output::OutputFormat;

use crate::cli::args::GlobalOptions;

/// Context for command execution containing config and resolved options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Output format after applying config defaults
    pub format: OutputFormat,
    /// API root after applying overrides
    pub api_base: String,
}

impl CommandContext {
    /// Load config and resolve format and API root.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default();

        let api_base = config.resolve_api_base(opts.api_base_ref());
        debug!("Using API root {}", api_base);

        Ok(Self {
            config,
            format,
            api_base,
        })
    }

    /// Build a client for `org`, or the configured default organization
    pub fn client(&self, org: Option<&str>) -> Result<GithubOrgClient> {
        let org = self.config.resolve_org(org)?;
        Ok(GithubOrgClient::new(org)?.with_base_url(self.api_base.as_str()))
    }
}
