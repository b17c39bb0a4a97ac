//! Configuration command implementation.

use anyhow::{Context, Result};

use crate::config::Config;

/// Keys accepted by `config get` and `config set`.
pub const KEYS: [&str; 5] = ["rule", "width", "steps", "tick_delay_ms", "cell_size"];

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("⚙️  ECA Configuration");
    println!("{:─<50}", "");
    println!();
    println!("Simulation defaults:");
    println!("  rule:          {}", config.rule);
    println!("  width:         {}", config.width);
    println!("  steps:         {}", config.steps);
    println!();
    println!("Playback:");
    println!("  tick_delay_ms: {}", config.tick_delay_ms);
    println!("  cell_size:     {}", config.cell_size);
    println!();

    if let Some(path) = Config::config_file_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let value = value.trim();
    match key {
        "rule" => config.rule = parse(key, value)?,
        "width" => config.width = parse(key, value)?,
        "steps" => config.steps = parse(key, value)?,
        "tick_delay_ms" => config.tick_delay_ms = parse(key, value)?,
        "cell_size" => config.cell_size = parse(key, value)?,
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS.join(", "));
        }
    }

    // Refuse to persist defaults that no command could start with
    config.params(None, None, None)?;
    if config.cell_size == 0 {
        anyhow::bail!("cell_size must be greater than 0");
    }

    let path = config.save()?;
    println!("✅ Set {} = {}", key, value);
    println!("   Saved to {}", path.display());
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "rule" => config.rule.to_string(),
        "width" => config.width.to_string(),
        "steps" => config.steps.to_string(),
        "tick_delay_ms" => config.tick_delay_ms.to_string(),
        "cell_size" => config.cell_size.to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS.join(", "));
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    let path = config.save()?;
    println!("✅ Configuration reset to defaults");
    println!("   Saved to {}", path.display());
    Ok(())
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("Invalid value for {key}: {value:?}"))
}
