//! Global CLI options shared across all commands

use ghorg::output::OutputFormat;

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved
/// in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.ghorg/config.yaml)
    pub config: Option<String>,

    /// API root override
    pub api_base: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_base: cli.api_base.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API root override as `Option<&str>`.
    pub fn api_base_ref(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}
