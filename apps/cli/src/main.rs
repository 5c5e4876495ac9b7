use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tkit_cli::args::Cli;
use tkit_cli::commands;
use tkit_cli::config::{AppConfig, load_config};
use tkit_logger::{LevelFilter, Logger};
use tkit_textops::TextOps;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    if let Some(encoding) = cli.encoding {
        cfg.text.encoding = encoding;
    }

    let level = match cli.verbose {
        0 => cfg.log.level,
        1 => cfg.log.level.max(LevelFilter::DEBUG),
        _ => LevelFilter::TRACE,
    };
    let _logger = Logger::builder(env!("CARGO_BIN_NAME"))
        .settings(cfg.log)
        .level(level)
        .init()
        .context("Failed to initialize logging")?;

    let text = TextOps::from_config(&cfg.text).context("Invalid text configuration")?;
    let output = commands::execute(&text, &cli.command)?;

    let mut stdout = std::io::stdout().lock();
    output.write_to(&mut stdout).context("Failed to write output")?;
    stdout.flush()?;

    Ok(if output.success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
