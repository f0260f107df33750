//! CineMax - a terminal client for browsing and discovering movies
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use cinemax_app::config;
use cinemax_core::prelude::*;
use clap::Parser;

/// CineMax - find your next favourite film from the terminal
#[derive(Parser, Debug)]
#[command(name = "cinemax", version)]
#[command(about = "A terminal client for browsing and discovering movies", long_about = None)]
struct Args {
    /// Base URL of the CineMax movie service (overrides CINEMAX_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    if args.init_config {
        let path = match args.config {
            Some(path) => path,
            None => config::default_config_path()
                .ok_or_else(|| Error::config("No config directory on this platform"))?,
        };
        if config::init_config_file(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists", path.display());
        }
        return Ok(());
    }

    // Logs go to a file, the terminal belongs to the UI
    cinemax_core::logging::init()?;

    let mut settings = config::resolve_settings(args.config.as_deref(), args.api_url)?;
    if args.no_mouse {
        settings.ui.mouse = false;
    }

    let result = cinemax_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("CineMax exiting");
    Ok(result?)
}
