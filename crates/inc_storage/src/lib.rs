use std::path::{Path, PathBuf};

use async_trait::async_trait;
use inc_core::{ArticleRecord, Error, Result};
use serde::Serialize;
use serde_json::Value;

pub mod backends;

pub use backends::*;

/// Where datasets, removed sets and metrics are read from and written to.
#[async_trait]
pub trait DatasetStorage: Send + Sync {
    fn name(&self) -> &str;
    async fn exists(&self, path: &Path) -> bool;
    /// Fails with `Error::InputNotFound` when nothing is stored at `path`.
    async fn read_json(&self, path: &Path) -> Result<Value>;
    async fn write_json(&self, path: &Path, value: &Value) -> Result<()>;
}

pub async fn load_records(storage: &dyn DatasetStorage, path: &Path) -> Result<Vec<ArticleRecord>> {
    let items = match storage.read_json(path).await? {
        Value::Array(items) => items,
        _ => return Err(Error::Storage(format!("{} does not hold a JSON array", path.display()))),
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ArticleRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("skipping entry {} of {}: {}", index, path.display(), e),
        }
    }
    tracing::debug!("loaded {} records from {} ({})", records.len(), path.display(), storage.name());
    Ok(records)
}

pub async fn save<T: Serialize + ?Sized>(storage: &dyn DatasetStorage, path: &Path, data: &T) -> Result<()> {
    let value = serde_json::to_value(data)?;
    storage.write_json(path, &value).await?;
    tracing::debug!("wrote {} ({})", path.display(), storage.name());
    Ok(())
}

/// `data/incidents.json` -> `data/incidents_removed.json`.
pub fn removed_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}_removed.json", stem))
}
