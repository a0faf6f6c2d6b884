use super::require_text;
use crate::cli::NoteAction;
use crate::context::CliContext;
use crate::output::{self, NoteView};
use notecycle_domain::NoteOperations;

pub fn handle(ctx: &mut CliContext, action: NoteAction) -> anyhow::Result<()> {
    match action {
        NoteAction::Add { text } => {
            let text = require_text("Note text", text)?;
            let snapshot = ctx.state.add_note_to_active(text)?;
            output::output_state(&snapshot);
        }
        NoteAction::List => {
            let notes: Vec<NoteView> = ctx
                .state
                .store()
                .active_item()
                .map(|item| {
                    item.notes
                        .iter()
                        .enumerate()
                        .map(|(index, note)| NoteView { index, note })
                        .collect()
                })
                .unwrap_or_default();
            output::output_list(notes);
        }
        NoteAction::Delete { index } => {
            let snapshot = ctx.state.delete_note_from_active(index)?;
            output::output_state(&snapshot);
        }
    }
    Ok(())
}
