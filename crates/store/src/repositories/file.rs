use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use tokio::fs;

use super::AppointmentRepository;

/// File-backed storage slot.
///
/// The file path plays the role of the storage key. Writes go through a
/// sibling temp file and a rename, so a reader never observes a torn
/// payload.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AppointmentRepository for FileRepository {
    async fn read(&self) -> Result<Option<String>> {
        tracing::debug!("Reading appointments from {}", self.path.display());

        match fs::read_to_string(&self.path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .wrap_err_with(|| format!("Failed to read {}", self.path.display())),
        }
    }

    async fn write(&self, payload: &str) -> Result<()> {
        tracing::debug!(
            "Writing {} bytes of appointment state to {}",
            payload.len(),
            self.path.display()
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)
            .await
            .wrap_err_with(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .wrap_err_with(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}
