use anyhow::{Context, Result};
use famboard_core::config::FamboardConfig;
use famboard_core::layout::TieBreak;
use owo_colors::OwoColorize;

pub fn run(tie_break: Option<&str>) -> Result<()> {
    let config_path = FamboardConfig::config_path()?;
    let mut config = super::load_config_at(&config_path)?;

    if let Some(policy) = tie_break {
        config.tie_break = policy.parse::<TieBreak>()?;
        config
            .save(&config_path)
            .with_context(|| format!("Failed to save {}", config_path.display()))?;
        println!("{} tie_break = {}", "Saved".green(), config.tie_break);
        println!();
    }

    println!("{} {}", "Config:".dimmed(), config_path.display());
    println!("{} {}", "Data:".dimmed(), config.household_path().display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
