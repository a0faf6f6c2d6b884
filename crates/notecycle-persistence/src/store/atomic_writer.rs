use notecycle_core::NotecycleResult;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Atomic file writer that prevents torn snapshots
/// Uses write-to-temp-file → atomic-rename so readers only ever see a whole file
pub struct AtomicWriter;

impl AtomicWriter {
    /// Replace the contents of `path` with `data`, creating parent directories as needed
    pub async fn write_atomic(path: &Path, data: &[u8]) -> NotecycleResult<()> {
        // Temp file must share the target's filesystem for rename to be atomic
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read the whole file, or `None` if it does not exist
    pub async fn read_optional(path: &Path) -> NotecycleResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Nothing stored at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
