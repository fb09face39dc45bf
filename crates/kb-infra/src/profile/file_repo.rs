//! File-based profile document store
//!
//! All documents live in one JSON object keyed by uid. Writes are
//! read-modify-write under a process-local lock.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use kb_core::ports::{ProfileRepositoryPort, ServiceError};
use kb_core::{ProfileDocument, ProfilePatch};

use crate::fs::JsonFile;

pub const DEFAULT_PROFILES_FILE: &str = "profiles.json";

type Documents = BTreeMap<String, ProfileDocument>;

pub struct FileProfileRepository {
    file: JsonFile,
    write_lock: Mutex<()>,
}

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_PROFILES_FILE))
    }

    async fn documents(&self) -> Result<Documents, ServiceError> {
        self.file
            .read::<Documents>()
            .await
            .map(Option::unwrap_or_default)
            .map_err(storage_error)
    }
}

fn storage_error(err: anyhow::Error) -> ServiceError {
    let denied = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied);
    if denied {
        ServiceError::PermissionDenied(format!("{err:#}"))
    } else {
        ServiceError::Storage(format!("{err:#}"))
    }
}

#[async_trait]
impl ProfileRepositoryPort for FileProfileRepository {
    async fn fetch_profile(&self, uid: &str) -> Result<Option<ProfileDocument>, ServiceError> {
        Ok(self.documents().await?.remove(uid))
    }

    async fn update_fields(&self, uid: &str, patch: &ProfilePatch) -> Result<(), ServiceError> {
        if patch.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock().await;

        let mut documents = self.documents().await?;
        let doc = documents.entry(uid.to_string()).or_insert_with(|| {
            let mut doc = ProfileDocument::new(uid);
            doc.created_at = Some(Utc::now());
            doc
        });
        patch.apply_to(doc);

        self.file.write(&documents).await.map_err(storage_error)?;
        debug!(uid, fields = ?patch.field_names(), path = %self.file.path().display(), "profile updated");
        Ok(())
    }
}
