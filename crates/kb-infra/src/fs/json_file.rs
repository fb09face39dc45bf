use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

/// A JSON value stored in a single file.
///
/// A missing or blank file reads as `None`. Writes go to a sibling temp file
/// that is then renamed over the target, so readers see either the old or
/// the new content.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read {} failed", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content)
            .with_context(|| format!("parse {} failed", self.path.display()))?;
        Ok(Some(value))
    }

    pub async fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create dir failed: {}", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(value).context("serialize json failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp file to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    pub async fn remove(&self) -> Result<()> {
        if fs::try_exists(&self.path).await.unwrap_or(false) {
            fs::remove_file(&self.path)
                .await
                .with_context(|| format!("remove {} failed", self.path.display()))?;
        }
        Ok(())
    }
}
