//! newsbrief - Summarize news articles into a short bullet list.

use anyhow::Context;
use clap::Parser;
use newsbrief_cli::{commands, logging, output, AppConfig, Cli, Command};
use std::io::{self, Write};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Usage goes out before the config is read
    let Some(command) = cli.command else {
        output::write_general_usage(&mut out)?;
        return Ok(());
    };
    if let Some(usage) = command.missing_args_usage() {
        output::write_usage(&mut out, usage)?;
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match command {
        Command::Url(args) => commands::execute_url(args, &config, &mut out).await?,
        Command::Topic(args) => commands::execute_topic(args, &config, &mut out).await?,
        Command::Setup => commands::execute_setup(&config, &mut out).context("Setup failed")?,
    }

    out.flush()?;
    Ok(())
}
