use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ccusage_rainbow::cli::Cli;
use ccusage_rainbow::cost::{self, CommandSource};
use ccusage_rainbow::{display, Config, Session, ViewOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "ccusage-rainbow", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("ccusage-rainbow requires a terminal (TTY)");
    }

    let text = match cli.literal_text() {
        Some(text) => {
            info!(%text, "using literal text");
            text
        }
        None => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            cost::fetch_text(&CommandSource::from(&config.source))
        }
    };

    let options = ViewOptions {
        size: cli.size,
        color: std::env::var_os("NO_COLOR").is_none(),
    };

    let mut session = Session::new(text, options);
    display::run(&mut session)
}

/// Log to a file only; anything on stdout/stderr would tear the frame.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
