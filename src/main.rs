//! Terminal entry point for tactile-calc
//!
//! Parses the command line, initializes logging, and hands control to
//! the interactive session (or runs a single `--keys` sequence).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod input;
mod ui;

use crate::app::session::Session;

/// Keypad-driven four-function calculator for the terminal
///
/// Every character of an input line is one button press: digits and `.`
/// compose an operand, operation keys commit it. `√`, `cos`, and friends
/// are reachable through ASCII aliases (`r`, `c`, `p`, `n`, `*`, `/`).
#[derive(Debug, Parser)]
#[command(name = "tactile-calc", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run one button sequence (e.g. "3+4=") and print the display
    #[arg(long, value_name = "KEYS")]
    keys: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut session = Session::bootstrap(cli.config.as_deref())?;

    match cli.keys {
        Some(keys) => {
            println!("{}", session.handle_line(&keys));
            Ok(())
        }
        None => Ok(session.run()?),
    }
}
