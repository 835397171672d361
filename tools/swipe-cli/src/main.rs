//! SushiSwipe CLI - browse the catalog one card at a time.
//!
//! Commands:
//! - `sushi-swipe categories` - List categories
//! - `sushi-swipe items` - List the deck for a category
//! - `sushi-swipe classify` - Classify a drag measurement
//! - `sushi-swipe play` - Replay scripted swipes and print the cart
//! - `sushi-swipe browse` - Swipe interactively
//! - `sushi-swipe config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ClassifyArgs, ConfigArgs, ItemsArgs, PlayArgs};

/// SushiSwipe - swipe through sushi ingredients and build a cart
#[derive(Parser)]
#[command(name = "sushi-swipe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories
    Categories,

    /// List the items of a category in deck order
    Items(ItemsArgs),

    /// Classify a drag-end measurement
    Classify(ClassifyArgs),

    /// Replay scripted swipes against a category
    Play(PlayArgs),

    /// Swipe through the catalog interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = run(cli.command, &ctx).await;

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, ctx: &context::Context) -> Result<()> {
    // `config` stays usable with bad settings so they can be inspected and fixed.
    if !matches!(command, Commands::Config(_)) {
        ctx.validate()?;
    }

    match command {
        Commands::Categories => commands::catalog::categories(ctx).await,
        Commands::Items(args) => commands::catalog::items(args, ctx).await,
        Commands::Classify(args) => commands::classify::run(args, ctx).await,
        Commands::Play(args) => commands::play::run(args, ctx).await,
        Commands::Browse(args) => commands::browse::run(args, ctx).await,
        Commands::Config(args) => commands::config::run(args, ctx).await,
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
