//! Sitewright CLI
//!
//! Builds the demo site into an output directory:
//!
//!   sitewright [--config site.toml] [--output DIR] [--clean]
//!
//! Cleaning and creating the output directory happen here, before the rule
//! tree runs; the engine itself only ever writes files.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitewright::site::{Site, SiteTemplate, TitleKey};
use sitewright::{RuleExt, SiteConfig};

#[derive(Parser)]
#[command(name = "sitewright")]
#[command(about = "Declarative rule-tree static-site builder")]
struct Cli {
    /// Site configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove the output directory before building
    #[arg(long)]
    clean: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match SiteConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SiteConfig::default(),
    };

    let output = cli.output.unwrap_or_else(|| config.output_directory.clone());

    if cli.clean {
        // a missing directory is fine
        let _ = fs::remove_dir_all(&output);
    }
    if let Err(e) = fs::create_dir_all(&output) {
        eprintln!("Error creating output directory '{}': {}", output.display(), e);
        std::process::exit(1);
    }

    let site = Site
        .environment::<TitleKey>(config.title)
        .wrap(SiteTemplate::new());

    if let Err(e) = site.execute(&output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
