//! Icongen - procedural icon set generator for browser extensions.

mod adapters;
mod canvas;
mod cli;
mod config;
mod context;
mod error;
mod generator;
mod ports;
mod request;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::generator::generate_all;
use crate::request::icon_set;

fn main() {
    let cli = Cli::parse();

    // Failures are reported in text only; the exit status stays zero.
    if let Err(e) = run(&cli) {
        println!("❌ Error while creating icons: {e}");
    }
}

fn run(cli: &Cli) -> Result<(), error::IconError> {
    let ctx = ServiceContext::from_env();

    if !ctx.writer.is_available() {
        print_install_hint();
        return Ok(());
    }

    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::IconError::Config)?;
    let root = config.output_root(cli.out_dir.as_deref());

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
        eprintln!("Output root: {}", root.display());
        eprintln!("Writer: {}", ctx.writer.name());
    }

    let summary = generate_all(ctx.writer.as_ref(), &icon_set(&root));

    if cli.verbose && !summary.all_succeeded() {
        eprintln!("{} icon(s) failed", summary.total - summary.succeeded);
    }

    Ok(())
}

fn print_install_hint() {
    println!("❌ Error: PNG encoding is not available in this build");
    println!("📦 Rebuild with the `png` feature of the `image` crate enabled");
    println!("\n🔄 Or work around it:");
    println!("1. Remove the icon entries from manifest.json");
    println!("2. Download a ready-made icon set");
}
