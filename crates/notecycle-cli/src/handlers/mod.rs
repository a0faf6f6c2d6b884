pub mod export;
pub mod item;
pub mod navigation;
pub mod note;

use crate::cli::Commands;
use crate::context::CliContext;

pub async fn dispatch(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show => navigation::handle_show(ctx),
        Commands::Next => navigation::handle_next(ctx),
        Commands::Prev => navigation::handle_prev(ctx),
        Commands::Item(item_cmd) => item::handle(ctx, item_cmd.action),
        Commands::Note(note_cmd) => note::handle(ctx, note_cmd.action),
        Commands::Export(args) => export::handle_export(ctx, args).await,
        Commands::Import(args) => export::handle_import(ctx, args).await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Trim user text and refuse blanks
pub(crate) fn require_text(field: &str, value: String) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{} must not be empty", field);
    }
    Ok(trimmed.to_string())
}
