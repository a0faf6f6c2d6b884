use crate::cli::{ExportArgs, ImportArgs};
use crate::context::CliContext;
use crate::output;
use notecycle_domain::NoteOperations;
use std::io::Read;

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let json = ctx.state.export_text()?;
    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &json)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            tracing::info!("Exported to {}", path.display());
            output::output_success(serde_json::json!({ "exported": path.display().to_string() }));
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub async fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let data = match args.input {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let snapshot = ctx
        .state
        .import_text(&data)
        .map_err(|e| anyhow::anyhow!("Import failed: {}", e))?;
    output::output_state(&snapshot);
    Ok(())
}
