//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use swipe_commerce::catalog::CatalogProvider;
use swipe_commerce::CategoryId;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
        ConfigCommand::Path => show_path(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let gesture = &ctx.config.gesture;
    ctx.output.info("[gesture]");
    ctx.output.kv(
        "horizontal",
        &format!(
            "distance {} / velocity {}",
            gesture.horizontal.distance, gesture.horizontal.velocity
        ),
    );
    ctx.output.kv(
        "vertical",
        &format!(
            "distance {} / velocity {}",
            gesture.vertical.distance, gesture.vertical.velocity
        ),
    );

    ctx.output.info("[transition]");
    ctx.output.kv(
        "advance_delay_ms",
        &ctx.config.transition.advance_delay_ms.to_string(),
    );
    ctx.output
        .kv("exit_distance", &ctx.config.transition.exit_distance.to_string());

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );
    ctx.output.kv(
        "default_category",
        ctx.config
            .catalog
            .default_category
            .as_deref()
            .unwrap_or("(first category)"),
    );

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(ref config_path) = ctx.config_path else {
        bail!("No config file found. Run `sushi-swipe config init` to create one.");
    };

    let mut config = CliConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;

    let errors = config.deck().errors();
    if !errors.is_empty() {
        bail!("Refusing to save: {}", errors.join("; "));
    }

    config.save(config_path)?;
    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors = ctx.config.deck().errors();
    let mut warnings: Vec<String> = Vec::new();

    let thresholds = &ctx.config.gesture;
    if thresholds.horizontal.distance == 0.0 || thresholds.vertical.distance == 0.0 {
        warnings.push("a zero distance threshold turns every nudge into a swipe".to_string());
    }

    match ctx.catalog() {
        Ok(catalog) => {
            if catalog.categories().is_empty() {
                warnings.push("catalog has no categories".to_string());
            }
            if let Some(ref id) = ctx.config.catalog.default_category {
                if catalog.category(&CategoryId::new(id.as_str())).is_none() {
                    errors.push(format!(
                        "catalog.default_category '{}' is not in the catalog",
                        id
                    ));
                }
            }
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

async fn show_path(ctx: &Context) -> Result<()> {
    match ctx.config_path {
        Some(ref path) => println!("{}", path.display()),
        None => ctx.output.info("No config file found; using defaults"),
    }
    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["gesture", "horizontal", "distance"] => config.gesture.horizontal.distance.to_string(),
        ["gesture", "horizontal", "velocity"] => config.gesture.horizontal.velocity.to_string(),
        ["gesture", "vertical", "distance"] => config.gesture.vertical.distance.to_string(),
        ["gesture", "vertical", "velocity"] => config.gesture.vertical.velocity.to_string(),
        ["transition", "advance_delay_ms"] => config.transition.advance_delay_ms.to_string(),
        ["transition", "exit_distance"] => config.transition.exit_distance.to_string(),
        ["catalog", "path"] => config.catalog.path.clone().unwrap_or_default(),
        ["catalog", "default_category"] => {
            config.catalog.default_category.clone().unwrap_or_default()
        }
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["gesture", "horizontal", "distance"] => config.gesture.horizontal.distance = value.parse()?,
        ["gesture", "horizontal", "velocity"] => config.gesture.horizontal.velocity = value.parse()?,
        ["gesture", "vertical", "distance"] => config.gesture.vertical.distance = value.parse()?,
        ["gesture", "vertical", "velocity"] => config.gesture.vertical.velocity = value.parse()?,
        ["transition", "advance_delay_ms"] => config.transition.advance_delay_ms = value.parse()?,
        ["transition", "exit_distance"] => config.transition.exit_distance = value.parse()?,
        ["catalog", "path"] => config.catalog.path = non_empty(value),
        ["catalog", "default_category"] => config.catalog.default_category = non_empty(value),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

/// An empty value unsets an optional key.
fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
