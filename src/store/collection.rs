//! A single JSON-array file holding every entity of one kind.

use crate::store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// One collection file plus the lock that serializes writers in this process.
///
/// Writers on *other* handles to the same file (another process, or a second
/// `JsonCollection` built for the same path) are not coordinated: whoever
/// writes last wins.
pub struct JsonCollection<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file as `[]` if it does not exist yet.
    pub async fn init(&self) -> Result<(), StoreError> {
        if !tokio::fs::try_exists(&self.path).await? {
            tokio::fs::write(&self.path, "[]").await?;
            log::info!("Created {}", self.path.display());
        }
        Ok(())
    }

    /// Every entity in stored order. A missing or blank file is empty.
    pub async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Overwrite the file with `items`. The new content is written to a
    /// sibling temp file first and renamed over the old one.
    pub async fn replace_all(&self, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read, apply `f`, write back; all under the collection lock.
    ///
    /// Nothing is written when `f` fails.
    pub async fn modify<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read_all().await?;
        let out = f(&mut items)?;
        self.replace_all(&items).await?;
        Ok(out)
    }
}
