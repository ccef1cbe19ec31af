use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use salary_core::compute_comparison;
use salary_ui::{
    app::{self, StartupInput},
    config::AppConfig,
    logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Offshore hiring cost calculator.
///
/// Opens the calculator window, optionally pre-filled from the command line.
/// With `--report` the comparison is printed instead and no window is opened.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML settings file. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Role preset to start from, e.g. "Software Engineer".
    #[arg(long)]
    preset: Option<String>,

    /// Role title. Overrides the preset title.
    #[arg(long)]
    role: Option<String>,

    /// Annual U.S. salary. Overrides the preset salary.
    #[arg(long)]
    salary: Option<String>,

    /// Print the comparison to stdout and exit. Not affected by log settings.
    #[arg(long)]
    report: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    logging::init_logging(&config.logging)?;
    debug!(?config, "starting calculator");

    let state = app::initial_state(StartupInput {
        preset: cli.preset,
        role: cli.role,
        salary: cli.salary,
    });

    if cli.report {
        let input = state.input().context("cannot build report")?;
        let comparison = compute_comparison(&input);
        let locale = config.locale();
        app::write_report(&mut io::stdout().lock(), &comparison, &locale)
            .context("cannot write report")?;
        return Ok(());
    }

    salary_ui::run(config, state)
}
