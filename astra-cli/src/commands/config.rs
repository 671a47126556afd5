//! Config command for inspecting the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::ConfigLoader;

/// Arguments for the config command
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for config
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show {
        /// Path to a config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show { config } => {
            let config = ConfigLoader::load(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
