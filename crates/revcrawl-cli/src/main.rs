//! Command-line front end for the review extractor.
//!
//! The browser-automation half of the original crawl (navigation, "Next"
//! clicks, "Read more" expansion) is a separate concern; this binary picks
//! up where it left off, taking already-rendered page HTML files and
//! running them through the extraction core.

mod export;
mod pages;

use clap::{Parser, Subcommand};

use revcrawl_core::LocatorConfig;

#[derive(Debug, Parser)]
#[command(name = "revcrawl")]
#[command(about = "Extract structured review records from rendered hotel pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract records from saved page HTML files and export them.
    Extract(pages::ExtractArgs),
    /// Print the built-in locator table as YAML, as a starting point for
    /// an operator-versioned locator file.
    Schema,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => pages::run(&args),
        Commands::Schema => {
            print!("{}", LocatorConfig::builtin().to_yaml_string()?);
            Ok(())
        }
    }
}
