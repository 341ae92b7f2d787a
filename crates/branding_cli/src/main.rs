//! Branding badge updater CLI
//!
//! Embeds `public/thank_donors_stamp.png` into the webhook receiver's
//! postcard template. Run from the repository root; takes no options.

#![warn(missing_docs)]
#![warn(clippy::all)]

use branding_core::BrandingConfig;
use clap::Parser;
use color_eyre::Result;
use std::io::Write;

#[derive(Parser)]
#[command(name = "update-branding")]
#[command(
    version,
    about = "Embed the donor stamp badge into the webhook receiver",
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter("branding=warn")
        .with_writer(std::io::stderr)
        .init();

    let config = BrandingConfig::default();
    execute(&config, &mut std::io::stdout().lock())
}

/// Run the update, reporting a missing input on `out` instead of failing
fn execute<W: Write>(config: &BrandingConfig, out: &mut W) -> Result<()> {
    match branding_core::run(config, out) {
        Ok(_) => Ok(()),
        Err(err) if err.is_missing_input() => {
            writeln!(out, "Error: {}", err)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
