//! Guestbook command line.
//!
//! ```bash
//! guestbook --endpoint https://script.example/exec list
//! guestbook sign --name "Aina" --message "Semoga bahagia"
//! guestbook watch
//! guestbook ping
//! guestbook config init --endpoint https://script.example/exec
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(version)]
#[command(about = "Read and sign the engagement guestbook")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: <config dir>/guestbook/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Remote endpoint, overriding the config file
    #[arg(long, global = true, env = "GUESTBOOK_ENDPOINT")]
    endpoint: Option<String>,

    /// Local cache file, overriding the config file
    #[arg(long, global = true, env = "GUESTBOOK_CACHE")]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the wishes and print them, newest first
    List,

    /// Leave a wish
    Sign {
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
    },

    /// Keep the guestbook on screen, refreshing and rotating until Ctrl-C
    Watch,

    /// Check whether the endpoint answers
    Ping,

    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a config file with the given endpoint
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let overrides = commands::Overrides {
        config_path: cli.config,
        endpoint: cli.endpoint,
        cache: cli.cache,
    };

    match cli.command {
        Commands::List => commands::list(&overrides).await,
        Commands::Sign { name, message } => commands::sign(&overrides, &name, &message).await,
        Commands::Watch => commands::watch(&overrides).await,
        Commands::Ping => commands::ping(&overrides).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&overrides),
            ConfigAction::Init => commands::config_init(&overrides),
        },
    }
}
