//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "breedcache")]
#[command(about = "Look up dog sub-breeds through a caching dog.ceo client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .breedcache/config.yaml)
    #[arg(short, long, global = true, env = "BREEDCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up sub-breeds; repeated breeds are answered from the cache
    Lookup(LookupArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments of `lookup`
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Breed names, resolved in order
    #[arg(required = true)]
    pub breeds: Vec<String>,

    /// Override the dog API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}
