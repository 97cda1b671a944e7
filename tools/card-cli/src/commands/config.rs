//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use card_core::config::CardConfig;
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force, json } => init_config(force, json, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv(
        "description_limit",
        &ctx.config.display.description_limit.to_string(),
    );
    ctx.output.kv("ellipsis", &ctx.config.display.ellipsis);

    ctx.output.info("");
    ctx.output.info("[toast]");
    ctx.output.kv("message", &ctx.config.toast.message);
    ctx.output.kv("position", ctx.config.toast.position.as_str());
    ctx.output
        .kv("auto_close_ms", &ctx.config.toast.auto_close_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level.to_string());
    ctx.output
        .kv("format", &ctx.config.logging.format.to_string());
    ctx.output.kv("stderr", &ctx.config.logging.stderr.to_string());

    Ok(())
}

async fn init_config(force: bool, json: bool, ctx: &Context) -> Result<()> {
    let name = if json { "card.json" } else { "card.toml" };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        let overwrite = !ctx.output.is_json()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()
                .unwrap_or(false);

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        ctx.output
            .warn(&format!("Overwriting {}", config_path.display()));
    }

    CardConfig::default()
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found (looked for card.toml, .card.toml, card.json)");
    };

    // Context::load already parsed it; validate again for an explicit verdict.
    ctx.config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "valid": true,
        }));
    } else {
        ctx.output
            .success(&format!("{} is valid", path.display()));
    }
    Ok(())
}
