use anyhow::Context;
use clap::Parser;
use keypad::session::run_session;
use keypad::terminal::{OutputFormat, TerminalDisplay};
use keypad::{Calculator, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven calculator for the terminal.
///
/// Type keys and press Enter: digits, `.`, `+ - * /`, `=` to compute,
/// `c` to clear, `back` for backspace, `neg` to toggle the sign.
#[derive(Debug, Parser)]
#[command(name = "keypad", version, about)]
struct Cli {
    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write display events as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the transition history as JSON when input ends
    #[arg(long)]
    transcript: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    let display = TerminalDisplay::stdout(format);

    let calculator = run_session(tokio::io::stdin(), display, Calculator::new(settings)).await?;

    if cli.transcript {
        let json = serde_json::to_string_pretty(calculator.history())?;
        println!("{json}");
    }

    Ok(())
}
