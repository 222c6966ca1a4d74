//! stools: run locally installed tools by name.
//!
//! All failures surface here; this is the only place that picks an exit
//! status.

mod cli;
mod error;
mod logging;

use std::io::Write;
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use stools_core::{Dispatcher, InstallRoot, Outcome};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Usage) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::Logging {
        message: e.to_string(),
    })?;

    let root = match &cli.root {
        Some(dir) => InstallRoot::from_dir(dir)?,
        None => InstallRoot::from_current_exe()?,
    };
    tracing::debug!(root = %root.path(), "Using install root");

    let dispatcher = Dispatcher::new(root).with_quoting(cli.quoting());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = dispatcher.dispatch(&cli.args, &mut out)?;

    if outcome == Outcome::Usage {
        let usage = dispatcher.usage(&program_name())?;
        out.write_all(usage.as_bytes())?;
        out.flush()?;
    }
    Ok(outcome)
}

/// File name this binary was invoked as.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stools".to_string())
}
