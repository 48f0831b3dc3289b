//! CLI argument parsing with clap.

use clap::Parser;

/// Draws the browser-extension icon set (16, 48 and 128 px PNGs).
#[derive(Parser, Debug)]
#[command(name = "icongen", version, about)]
pub struct Cli {
    /// Directory the `icons/` folder is written under.
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
