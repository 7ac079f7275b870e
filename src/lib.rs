pub mod cli;
pub mod config;
pub mod generate;
pub mod status;
pub mod templates;
pub mod util;

use anyhow::Result;
use clap::Parser;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    util::init_logging(cli.verbose);

    let mut app_config = config::load()?;
    let config_path = config::resolve_config_path()?;

    match cli.command {
        cli::Commands::Generate { opts } => {
            info!("generating provisioning script");
            generate::run(opts, &config_path, &mut app_config)?;
        }
        cli::Commands::Status => {
            info!("checking status");
            status::run(&app_config)?;
        }
    }

    Ok(())
}
