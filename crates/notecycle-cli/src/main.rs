mod cli;
mod context;
mod handlers;
mod output;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = init_tracing() {
        output::output_error(&format!("{:#}", e));
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "notecycle", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = CliContext::load(cli.file, cli.backend.map(Into::into)).await;
    let result = handlers::dispatch(&mut ctx, cli.command).await;
    let flushed = ctx.finish().await;

    if let Err(e) = result.and(flushed.map(|_| ())) {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("NOTECYCLE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open debug log {}", log_path))?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}
