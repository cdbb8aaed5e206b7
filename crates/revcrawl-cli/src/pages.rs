//! The `extract` subcommand: saved pages in, JSON-lines records out.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use revcrawl_core::{LocatorConfig, PageResultSet};
use revcrawl_extract::{assemble_page, Schema};

use crate::export;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Hotel name, merged into every exported row.
    #[arg(long)]
    pub hotel: String,

    /// Hotel place, merged into every exported row.
    #[arg(long)]
    pub place: String,

    /// Locator YAML file; the built-in table is used when omitted.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Saved, fully-rendered page HTML files, in page order.
    #[arg(required = true)]
    pub pages: Vec<PathBuf>,
}

pub fn run(args: &ExtractArgs) -> anyhow::Result<()> {
    let schema = match &args.schema {
        Some(path) => {
            let config = LocatorConfig::from_yaml_file(path)?;
            Schema::from_config(&config)
                .with_context(|| format!("locator file {}", path.display()))?
        }
        None => Schema::builtin(),
    };

    let mut results = PageResultSet::new();
    for path in &args.pages {
        let html = fs::read_to_string(path)
            .with_context(|| format!("cannot read page {}", path.display()))?;
        let outcome = assemble_page(&schema, &html, &mut results)
            .with_context(|| format!("cannot extract page {}", path.display()))?;
        tracing::info!(
            page = %path.display(),
            assembled = outcome.assembled,
            failed = outcome.failed,
            "page extracted"
        );
    }

    tracing::info!(
        records = results.len(),
        blocks = results.review_count(),
        "extraction finished"
    );

    match &args.out {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            export::write_jsonl(file, results.records(), &args.hotel, &args.place)?;
            tracing::info!(out = %path.display(), "records exported");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export::write_jsonl(&mut lock, results.records(), &args.hotel, &args.place)?;
            lock.flush()?;
        }
    }

    Ok(())
}
