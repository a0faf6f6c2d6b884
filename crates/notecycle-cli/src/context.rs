use notecycle_core::{AppConfig, BackendKind};
use notecycle_persistence::{open_adapter, SaveStats, StateManager};
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// Loaded state plus the running save worker for one CLI invocation
pub struct CliContext {
    pub state: StateManager,
    save_handle: JoinHandle<SaveStats>,
}

impl CliContext {
    pub async fn load(file: Option<PathBuf>, backend: Option<BackendKind>) -> Self {
        let config = resolve_config(AppConfig::load(), file, backend);
        let adapter = open_adapter(&config);
        let (state, worker) =
            StateManager::load(adapter, config.clamp_active_index_on_load).await;

        Self {
            state,
            save_handle: worker.spawn(),
        }
    }

    /// Wait for queued saves to reach the backing medium
    pub async fn finish(mut self) -> anyhow::Result<SaveStats> {
        self.state.close_save_channel();
        let stats = self.save_handle.await?;
        if stats.failed > 0 {
            tracing::warn!("{} save(s) failed; changes may not be persisted", stats.failed);
        }
        Ok(stats)
    }
}

/// Apply command-line overrides on top of the config file
fn resolve_config(
    mut config: AppConfig,
    file: Option<PathBuf>,
    backend: Option<BackendKind>,
) -> AppConfig {
    if let Some(backend) = backend {
        config.backend = Some(backend);
    }
    if let Some(file) = file {
        match config.effective_backend() {
            BackendKind::File => config.data_file = Some(file),
            BackendKind::KeyValue => config.key_value_file = Some(file),
        }
    }
    config
}
