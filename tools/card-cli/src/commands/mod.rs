//! CLI command implementations.

pub mod config;
pub mod render;
pub mod simulate;

use card_observability::LogLevel;
use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product file (JSON or TOML).
    pub product: String,

    /// Render with the item already in the cart.
    #[arg(long)]
    pub added: bool,

    /// Render with the pointer over the card.
    #[arg(long)]
    pub hovering: bool,

    /// Write HTML to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the simulate command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Product file (JSON or TOML).
    pub product: String,

    /// Events to replay: `enter`, `leave`, `click`, or `wait:<ms>`.
    #[arg(required = true)]
    pub events: Vec<String>,

    /// Print card logs to stderr even when `logging.stderr` is off.
    #[arg(long)]
    pub logs: bool,

    /// Minimum card log level, overriding `logging.level`.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write JSON instead of TOML.
        #[arg(long)]
        json: bool,
    },
    /// Validate the config file.
    Validate,
}
