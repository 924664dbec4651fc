//! AIstylist - a terminal client for the AIstylist fashion assistant
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use stylist_app::config::CliOverrides;
use stylist_core::prelude::*;

use aistylist::LaunchOptions;

/// AIstylist - outfit ideas, stylist chat and your closet in the terminal
#[derive(Parser, Debug)]
#[command(name = "aistylist")]
#[command(about = "Outfit ideas, stylist chat and your closet in the terminal", long_about = None)]
struct Args {
    /// Base URL of the AIstylist server
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Value of the `session` cookie from a signed-in browser
    #[arg(long, value_name = "COOKIE")]
    cookie: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = aistylist::init_config(args.config)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    aistylist::run(LaunchOptions {
        config_path: args.config,
        overrides: CliOverrides {
            server: args.server,
            cookie: args.cookie,
        },
    })
    .await
}
