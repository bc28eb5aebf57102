use crate::types::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// A single persisted JSON-array document with serialized read-modify-write.
///
/// Each instance owns one flat JSON file holding a `Vec<T>` and the mutex
/// that serializes access to it. Every mutation runs the full cycle
/// "load collection, mutate in memory, persist collection" while holding the
/// lock, so two concurrent writers can never both read the same snapshot and
/// overwrite each other's change.
///
/// Persisting writes the serialized collection to a sibling `.tmp` file and
/// atomically renames it over the target, so a crash or concurrent reader
/// never observes a partially written document.
pub struct JsonDocument<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Reads the full collection. A missing file is an empty collection.
    pub async fn read(&self) -> Result<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Runs one serialized read-modify-write cycle.
    ///
    /// The mutation closure sees the freshly loaded collection; if it
    /// returns `Ok`, the whole collection is persisted before the lock is
    /// released. On any error nothing is written and the document keeps its
    /// previous contents.
    pub async fn update<R, F>(&self, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let _guard = self.lock.lock().await;

        let mut items = self.load().await?;
        let out = mutate(&mut items)?;
        self.persist(&items).await?;

        Ok(out)
    }

    async fn load(&self) -> Result<Vec<T>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Storage(format!("Malformed document {}: {}", self.path.display(), e))
        })
    }

    async fn persist(&self, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(items)
            .map_err(|e| AppError::Storage(format!("Failed to serialize collection: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        // Write-then-rename keeps the previous document intact if the write
        // fails partway.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;

        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn scratch_doc(dir: &tempfile::TempDir) -> JsonDocument<String> {
        JsonDocument::new(dir.path().join("items.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc = scratch_doc(&dir);

        let items = doc.read().await.expect("should read");
        assert!(items.is_empty(), "missing file should read as empty");
    }

    #[tokio::test]
    async fn test_update_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc = scratch_doc(&dir);

        doc.update(|items| {
            items.push("one".to_string());
            Ok(())
        })
        .await
        .expect("should update");

        let items = doc.read().await.expect("should read");
        assert_eq!(items, vec!["one".to_string()]);

        // No temp file left behind.
        assert!(!dir.path().join("items.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_mutation_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc = scratch_doc(&dir);

        doc.update(|items| {
            items.push("kept".to_string());
            Ok(())
        })
        .await
        .expect("should update");

        let result: Result<()> = doc
            .update(|items| {
                items.push("discarded".to_string());
                Err(AppError::InvalidInput("nope".to_string()))
            })
            .await;
        assert!(result.is_err());

        let items = doc.read().await.expect("should read");
        assert_eq!(items, vec!["kept".to_string()], "failed cycle must not persist");
    }

    #[tokio::test]
    async fn test_malformed_document_is_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("items.json");
        tokio::fs::write(&path, b"{ not json ]")
            .await
            .expect("write garbage");

        let doc: JsonDocument<String> = JsonDocument::new(&path);
        let result = doc.read().await;

        assert!(
            matches!(result, Err(AppError::Storage(_))),
            "parse failure should map to Storage"
        );
    }

    #[tokio::test]
    async fn test_concurrent_updates_lose_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc = Arc::new(scratch_doc(&dir));

        let mut handles = Vec::new();
        for i in 0..20 {
            let doc = doc.clone();
            handles.push(tokio::spawn(async move {
                doc.update(move |items| {
                    items.push(format!("item-{}", i));
                    Ok(())
                })
                .await
            }));
        }
        for handle in handles {
            handle.await.expect("join").expect("update");
        }

        let items = doc.read().await.expect("should read");
        assert_eq!(items.len(), 20, "every concurrent write must survive");
    }
}
