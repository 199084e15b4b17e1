use clap::{Parser, Subcommand};
use nutriscan::prelude::Barcode;
use std::path::PathBuf;

fn parse_barcode(value: &str) -> Result<Barcode, String> {
    Barcode::new(value).map_err(|e| e.to_string())
}

/// Scan product barcodes and look up their Nutri-Score on Open Food Facts
#[derive(Parser, Debug)]
#[command(name = "nutriscan")]
#[command(version)]
#[command(about = "Scan product barcodes and look up their Nutri-Score on Open Food Facts", long_about = None)]
pub struct Args {
    /// Product API base URL (defaults to the public Open Food Facts instance)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to ./nutriscan.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up one or more barcodes and print the results
    Lookup {
        /// Barcodes to look up (EAN-8, EAN-13, UPC-A, ...)
        #[arg(required = true, value_name = "BARCODE", value_parser = parse_barcode)]
        barcodes: Vec<Barcode>,
    },
    /// Read frames from stdin (one line per frame, barcodes separated by whitespace)
    Scan {
        /// Do not show a result that arrives after a newer scan's result
        #[arg(long)]
        discard_stale: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
