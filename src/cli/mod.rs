//! Command-line interface for ini-merge
//!
//! `ini-merge [OPTIONS] <OUT_FILE> <IN_FILE>...`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ini_merge::config::{load_config, CliOverrides};
use ini_merge::domain::GroupOrder;
use ini_merge::merge::{merge_files, report, MergeRequest};

/// Merge INI configuration files into one
#[derive(Parser)]
#[command(name = "ini-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to write the merged result to (its current contents are merged first)
    #[arg(value_name = "OUT_FILE")]
    out_file: PathBuf,

    /// Files to merge, in order of increasing precedence
    #[arg(value_name = "IN_FILE", required = true)]
    in_files: Vec<PathBuf>,

    /// Don't override contents of previous file (first value wins)
    #[arg(short = 'n', long)]
    no_override: bool,

    /// Order of non-General groups in the output
    #[arg(long, value_enum, value_name = "ORDER")]
    group_order: Option<GroupOrder>,

    /// Read settings from this config file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a summary of the merge to stdout
    #[arg(long, value_enum, value_name = "FORMAT")]
    summary: Option<SummaryFormat>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let overrides = CliOverrides { no_override: cli.no_override, group_order: cli.group_order };
    let config = load_config(&cwd, cli.config.as_deref())?.with_overrides(&overrides);
    tracing::debug!("Effective config: {:?}", config);

    let request = MergeRequest::new(cli.out_file, cli.in_files)
        .policy(config.policy())
        .render_options(config.render_options());
    let merged = merge_files(&request)?;

    match cli.summary {
        Some(SummaryFormat::Text) => print!("{}", report::render_text(&merged)),
        Some(SummaryFormat::Json) => println!("{}", report::render_json(&merged)?),
        None => {}
    }

    Ok(())
}
