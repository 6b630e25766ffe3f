use serde_json::Value as JsonValue;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::Document;

/// Name of the document file inside the data directory
pub const DOCUMENT_FILE: &str = "bookmark.json";

/// Errors raised by the document store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to {op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("stored document at {} is not valid JSON: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

fn io_error(op: &'static str) -> impl FnOnce(std::io::Error) -> StoreError {
    move |source| StoreError::Io { op, source }
}

/// File-backed store for the single bookmark document
///
/// All reads and writes go through one lock: fetches share it, replaces take
/// it exclusively. Writes land in a temporary sibling and are renamed over
/// the target, so the file on disk is always a complete document.
#[derive(Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl DocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = data_dir.join(DOCUMENT_FILE);
        Self {
            data_dir,
            path,
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Path of the document file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory if it does not exist yet
    pub async fn prepare(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(io_error("create data directory"))?;
        tracing::debug!("Data directory ready: {}", self.data_dir.display());
        Ok(())
    }

    /// Read the current document
    ///
    /// Returns the default document when nothing has been written yet. The
    /// fallback is not persisted.
    pub async fn fetch(&self) -> Result<JsonValue, StoreError> {
        let _guard = self.lock.read().await;

        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No document at {}, serving default", self.path.display());
                return serde_json::to_value(Document::default()).map_err(StoreError::Serialize);
            }
            Err(e) => return Err(io_error("read document")(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the stored document with `document`
    pub async fn replace(&self, document: &JsonValue) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(document).map_err(StoreError::Serialize)?;

        let _guard = self.lock.write().await;

        self.prepare().await?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_and_swap(&temp_path, &content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        tracing::debug!("Wrote {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn write_and_swap(&self, temp_path: &Path, content: &[u8]) -> Result<(), StoreError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(io_error("create temporary document"))?;
        file.write_all(content)
            .await
            .map_err(io_error("write temporary document"))?;
        file.sync_all()
            .await
            .map_err(io_error("flush temporary document"))?;
        drop(file);

        fs::rename(temp_path, &self.path)
            .await
            .map_err(io_error("replace document"))
    }

    /// Check that the data directory is reachable
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let metadata = fs::metadata(&self.data_dir)
            .await
            .map_err(io_error("inspect data directory"))?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(StoreError::Io {
                op: "inspect data directory",
                source: std::io::Error::other(format!(
                    "{} is not a directory",
                    self.data_dir.display()
                )),
            })
        }
    }
}
