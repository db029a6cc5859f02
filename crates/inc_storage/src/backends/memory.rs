use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use inc_core::{Error, Result};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::DatasetStorage;

/// Keeps documents in a shared map; clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<HashMap<PathBuf, Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn paths(&self) -> Vec<PathBuf> {
        let files = self.files.read().await;
        let mut paths: Vec<_> = files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl DatasetStorage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.read().await.contains_key(path)
    }

    async fn read_json(&self, path: &Path) -> Result<Value> {
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| Error::InputNotFound(path.to_path_buf()))
    }

    async fn write_json(&self, path: &Path, value: &Value) -> Result<()> {
        self.files.write().await.insert(path.to_path_buf(), value.clone());
        Ok(())
    }
}
