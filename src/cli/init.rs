use anyhow::{bail, Result};
use clap::Args;

use epiweek::config::{Config, DefaultsConfig};
use epiweek::Convention;

#[derive(Args)]
pub struct InitArgs {
    #[arg(long, default_value = "cdc", help = "Default week convention: cdc or iso")]
    pub convention: String,

    #[arg(long, help = "Output JSON by default")]
    pub json: bool,

    #[arg(long, help = "Overwrite an existing config file")]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() && !args.force {
        bail!(
            "Already initialized. Config exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let convention: Convention = args.convention.parse()?;
    let config = Config {
        defaults: DefaultsConfig {
            convention,
            json: args.json,
        },
    };

    config.save(&config_path)?;
    println!("Config saved to {}", config_path.display());
    Ok(())
}
