//! iconpress - icon collection loader and utility CSS builder.

mod asset;
mod cli;
mod config;
mod css;
mod icons;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BuildConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = BuildConfig::load(&cli)?;

    match &cli.command {
        Commands::List => {
            cli::list::list_collections(&config);
            Ok(())
        }
        Commands::Load {
            collection,
            pretty,
            output,
        } => block_on(cli::load::load_collection(
            &config,
            collection,
            *pretty,
            output.as_deref(),
        )),
        Commands::Css { .. } => block_on(cli::css::build_css(&config)),
        Commands::AssetName { files } => cli::asset::print_asset_names(&config, files),
        Commands::Plan { pretty } => cli::plan::print_plan(&config, *pretty),
    }
}

/// Run a command future on a multi-thread runtime.
fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    rt.block_on(future)
}
