use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceAdapter, Serializer};
use notecycle_core::{NotecycleError, NotecycleResult};
use notecycle_domain::Snapshot;
use std::path::{Path, PathBuf};

/// Snapshot stored as a plain JSON document at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PersistenceAdapter for JsonFileAdapter {
    async fn save(&self, snapshot: &Snapshot) -> NotecycleResult<()> {
        let json_bytes = JsonSerializer.serialize(snapshot)?;

        AtomicWriter::write_atomic(&self.path, &json_bytes)
            .await
            .map_err(|e| {
                NotecycleError::PersistenceWrite(format!("{}: {}", self.path.display(), e))
            })?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self) -> NotecycleResult<Option<Snapshot>> {
        let Some(file_bytes) = AtomicWriter::read_optional(&self.path).await? else {
            return Ok(None);
        };
        if file_bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let snapshot: Snapshot = JsonSerializer.deserialize(&file_bytes)?;

        tracing::info!(
            "Loaded {} items from {}",
            snapshot.items.len(),
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
