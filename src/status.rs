use anyhow::Result;
use console::style;

use crate::config::AppConfig;

pub fn run(app_config: &AppConfig) -> Result<()> {
    let path = match &app_config.last_script_path {
        Some(path) => path,
        None => {
            println!("{}", style("No script generated yet. Run 'searxng-provision generate' first.").yellow());
            return Ok(());
        }
    };

    println!("{}", style("Last generation").cyan().bold());
    println!("Script: {}", style(path.display()).dim());

    if let Some(domain) = &app_config.last_domain {
        println!("Domain: {}", style(domain).dim());
    }
    if let Some(port) = app_config.last_port {
        println!("Upstream port: {}", style(port).dim());
    }

    if path.exists() {
        println!("{}", style("Script file present").green());
    } else {
        println!("{}", style("Script file missing (moved or deleted)").yellow());
    }

    Ok(())
}
