//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod play;

use clap::{Args, Subcommand};
use swipe_deck::SwipeDirection;

/// Arguments for the items command.
#[derive(Args)]
pub struct ItemsArgs {
    /// Category id (default: configured default category).
    pub category: Option<String>,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Horizontal offset at release (positive = right).
    #[arg(long, short = 'x', default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_x: f64,

    /// Vertical offset at release (positive = down).
    #[arg(long, short = 'y', default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_y: f64,

    /// Horizontal release velocity.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub velocity_x: f64,

    /// Vertical release velocity.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub velocity_y: f64,
}

/// Arguments for the play command.
#[derive(Args)]
pub struct PlayArgs {
    /// Category to play (default: configured default category).
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Comma-separated commands: left, right, down (or l, r, d).
    #[arg(short, long, value_delimiter = ',', conflicts_with = "drags")]
    pub moves: Vec<SwipeDirection>,

    /// JSON file with an array of drag measurements.
    #[arg(short, long)]
    pub drags: Option<String>,

    /// Wait for exit transitions like the interactive view does.
    #[arg(long)]
    pub animate: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to open first.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and its catalog.
    Validate,
    /// Print the path of the config file in use.
    Path,
}
