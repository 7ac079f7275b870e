use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Password};
use tracing::debug;

use crate::{
    cli::GenerateOptions,
    config::{self, AppConfig},
    templates,
    util,
};

const DEFAULT_OUTPUT: &str = "./setup-searxng.sh";
const DEFAULT_PORT: u16 = 8080;

/// The four values the renderer consumes, gathered from flags or prompts.
#[derive(Debug)]
struct GenerateInputs {
    domain: String,
    admin_email: String,
    admin_password: String,
    port: u16,
}

pub fn run(
    opts: GenerateOptions,
    config_path: &Path,
    app_config: &mut AppConfig,
) -> Result<()> {
    println!("\n{}", style("SearxNG Provisioning").cyan().bold());
    println!("{}", style("Generates a self-contained setup script for a fresh host").dim());

    let output_path = resolve_output_path(&opts, app_config.last_script_path.clone())?;

    if output_path.exists() && !opts.force {
        anyhow::bail!(
            "{} exists. Use --force to overwrite.",
            output_path.display()
        );
    }

    let inputs = collect_inputs(&opts, app_config)?;
    debug!(domain = %inputs.domain, base = %templates::base_domain(&inputs.domain), "rendering script");

    let script = templates::setup_script(
        &inputs.domain,
        &inputs.admin_email,
        &inputs.admin_password,
        inputs.port,
    );

    util::write_string(&output_path, &script)?;
    util::make_executable(&output_path)
        .with_context(|| format!("failed to mark {} executable", output_path.display()))?;

    app_config.last_script_path = Some(output_path.clone());
    app_config.last_domain = Some(inputs.domain.clone());
    app_config.last_port = Some(inputs.port);
    config::save(config_path, app_config)?;

    println!("\n{}", style("Script ready").green().bold());
    println!(
        "1. Copy to the target host: {}",
        style(format!("scp {} root@{}:", output_path.display(), inputs.domain)).cyan()
    );
    println!(
        "2. Run it there as root: {}",
        style(format!("bash {}", file_name(&output_path))).cyan()
    );
    println!(
        "3. Once DNS points at the host: {}",
        style(format!("https://{}", inputs.domain)).cyan()
    );

    Ok(())
}

fn resolve_output_path(opts: &GenerateOptions, default: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(output) = &opts.output {
        return Ok(PathBuf::from(output));
    }

    let default_path = default.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let output = util::prompt_or_use(
        Some(util::path_display(&default_path)),
        "Output path for the script",
        false,
    )?;

    Ok(PathBuf::from(output))
}

fn collect_inputs(opts: &GenerateOptions, app_config: &AppConfig) -> Result<GenerateInputs> {
    let domain = match &opts.domain {
        Some(value) => value.clone(),
        None => util::prompt_or_use(
            app_config.last_domain.clone(),
            "Domain name (e.g., search.example.org)",
            false,
        )?,
    };

    let admin_email = match &opts.email {
        Some(value) => value.clone(),
        None => util::prompt_or_use(None, "Admin email (for Let's Encrypt)", false)?,
    };

    let admin_password = match &opts.password {
        Some(value) => value.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Admin password (reserved, may be left blank)")
            .allow_empty_password(true)
            .interact()?,
    };

    let port = match opts.port {
        Some(value) => value,
        None => {
            let default = app_config.last_port.unwrap_or(DEFAULT_PORT);
            let raw = util::prompt_or_use(Some(default.to_string()), "Upstream port", false)?;
            raw.trim()
                .parse()
                .with_context(|| format!("invalid port: {}", raw))?
        }
    };

    Ok(GenerateInputs {
        domain,
        admin_email,
        admin_password,
        port,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| util::path_display(path))
}
