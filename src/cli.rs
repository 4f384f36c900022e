use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "payflow",
    version,
    about = "Walk through a checkout: provision a key, create a payment intent, confirm it"
)]
pub struct Cli {
    /// Config file to use instead of <config dir>/payflow/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the demo backend base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Run all three steps without the terminal screen and print each state
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    /// Load the selected config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.backend.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(config)
    }
}
