use anyhow::Result;
use clap::{Parser, Subcommand};
use setlist_core::SetlistConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<()> {
    println!("{}", SetlistConfig::config_path().display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = SetlistConfig::load()?;
    println!("{}", config.to_toml()?);
    Ok(())
}
