use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use talent_wizard::config::WizardConfig;
use talent_wizard::shell::Shell;
use talent_wizard::{logging, Wizard};
use tracing::info;

#[derive(Parser)]
#[command(name = "talent-wizard")]
#[command(about = "Interactive job application wizard", long_about = None)]
struct Cli {
    /// TOML catalog replacing the built-in job offers and questions
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per line instead of text pages
    #[arg(long)]
    json: bool,

    /// tracing filter, e.g. `info` (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WizardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WizardConfig::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(filter) = cli.log_level {
        config.log_filter = filter;
    }
    config.json |= cli.json;

    logging::init(&config.log_filter);

    let catalog = config.load_catalog().context("loading catalog")?;
    info!(
        jobs = catalog.jobs().len(),
        recommendations = catalog.recommendations().len(),
        "catalog ready"
    );

    let wizard = Wizard::new(Arc::new(catalog)).context("building page flow")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Shell::new(wizard, stdin.lock(), stdout.lock(), config.json).run()?;

    info!(
        session = %summary.id,
        completed = summary.evaluation_done,
        "wizard finished"
    );
    Ok(())
}
