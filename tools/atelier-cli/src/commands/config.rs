//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let checkout = &ctx.config.checkout;
    let policy = checkout.shipping_policy();

    ctx.output.line("\n[store]");
    ctx.output.kv("data_dir", &ctx.data_dir.display().to_string());

    ctx.output.line("\n[checkout]");
    ctx.output.kv("processing_delay_ms", &checkout.processing_delay_ms.to_string());
    ctx.output.kv("free_shipping_threshold", &policy.free_threshold.display());
    ctx.output.kv("flat_shipping", &policy.flat_rate.display());

    ctx.output.line("\n[reviews]");
    ctx.output.kv("submit_delay_ms", &ctx.config.reviews.submit_delay_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("atelier.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
