use super::require_text;
use crate::cli::ItemAction;
use crate::context::CliContext;
use crate::output;
use notecycle_domain::NoteOperations;

pub fn handle(ctx: &mut CliContext, action: ItemAction) -> anyhow::Result<()> {
    let snapshot = match action {
        ItemAction::Add { title } => {
            let title = require_text("Title", title)?;
            ctx.state.add_item(title)?
        }
        ItemAction::List => {
            output::output_list(output::summarize(&ctx.state.snapshot()));
            return Ok(());
        }
        ItemAction::Edit { index, title } => {
            let title = require_text("Title", title)?;
            ctx.state.edit_item(index, title)?
        }
        ItemAction::Remove { index } => ctx.state.remove_item(index)?,
        ItemAction::Move { from, to } => ctx.state.reorder_item(from, to)?,
    };
    output::output_state(&snapshot);
    Ok(())
}
