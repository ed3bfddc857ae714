//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use ghorg::output::OutputFormat;

pub mod args;
pub mod config;
pub mod context;
pub mod org;
pub mod repo;
pub mod status;

pub use context::CommandContext;

/// ghorg - inspect GitHub organizations and their repositories
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "GHORG_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API root (GitHub Enterprise, local test servers)
    #[arg(long, global = true, env = "GHORG_API_BASE", hide_env = true)]
    pub api_base: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show organization metadata
    Org {
        /// Organization name (defaults to the configured organization)
        org: Option<String>,
    },

    /// List an organization's public repositories
    Repos {
        /// Organization name (defaults to the configured organization)
        org: Option<String>,

        /// Only list repositories under this license key (e.g. apache-2.0)
        #[arg(long)]
        license: Option<String>,
    },

    /// Show configuration status
    Status,

    /// Edit the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set the default organization
    SetOrg {
        /// Organization name
        org: String,
    },

    /// Set the API root
    SetApiBase {
        /// Base URL, e.g. https://github.example.com/api/v3
        url: String,
    },
}
