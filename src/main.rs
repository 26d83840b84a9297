//! Breedcache CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use breedcache::cli::{commands, Cli, Commands};
use breedcache::infrastructure::logging::{LogConfig, LoggerImpl};
use breedcache::{Config, ConfigLoader};

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => breedcache::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Lookup(args) => commands::lookup::execute(args, &config, cli.json)
            .await
            .map(|failures| failures == 0),
        Commands::Config => commands::config::execute(&config, cli.json).map(|()| true),
    };

    match result {
        Ok(true) => {}
        // The report is already on stdout; only the exit status is left
        Ok(false) => std::process::exit(1),
        Err(err) => breedcache::cli::handle_error(err, cli.json),
    }
}
