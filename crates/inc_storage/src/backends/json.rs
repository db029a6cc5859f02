use std::path::Path;

use async_trait::async_trait;
use inc_core::{Error, Result};
use serde_json::Value;
use tokio::fs;

use crate::DatasetStorage;

/// Pretty-printed UTF-8 JSON files on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct JsonFileStorage;

impl JsonFileStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatasetStorage for JsonFileStorage {
    fn name(&self) -> &str {
        "json"
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
    }

    async fn read_json(&self, path: &Path) -> Result<Value> {
        if !self.exists(path).await {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_json(&self, path: &Path, value: &Value) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');
        fs::write(path, bytes).await?;
        Ok(())
    }
}
