use crate::context::CliContext;
use crate::output;
use notecycle_domain::NoteOperations;

pub fn handle_show(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_state(&ctx.state.snapshot());
    Ok(())
}

pub fn handle_next(ctx: &mut CliContext) -> anyhow::Result<()> {
    let snapshot = ctx.state.cycle_next()?;
    output::output_state(&snapshot);
    Ok(())
}

pub fn handle_prev(ctx: &mut CliContext) -> anyhow::Result<()> {
    let snapshot = ctx.state.cycle_previous()?;
    output::output_state(&snapshot);
    Ok(())
}
