use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "searxng-provision")]
#[command(about = "SearxNG provisioning script generator", long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the provisioning script and write it to disk
    Generate {
        #[command(flatten)]
        opts: GenerateOptions,
    },
    /// Show the last generated script and its inputs
    Status,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Force overwrite of an existing output file
    #[arg(short, long)]
    pub force: bool,

    /// FQDN the instance will be served at (e.g., search.example.org)
    #[arg(long)]
    pub domain: Option<String>,

    /// Admin email, used for the Let's Encrypt registration
    #[arg(long)]
    pub email: Option<String>,

    /// Admin password (reserved; not emitted into the script)
    #[arg(long)]
    pub password: Option<String>,

    /// Upstream port nginx proxies to
    #[arg(long)]
    pub port: Option<u16>,

    /// Where to write the script
    #[arg(short, long)]
    pub output: Option<String>,
}
