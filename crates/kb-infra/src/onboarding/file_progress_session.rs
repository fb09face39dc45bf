//! File-based session storage for onboarding progress
//!
//! Records are kept in one JSON object keyed by uid.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kb_core::onboarding::OnboardingProgress;
use kb_core::ports::ProgressSessionPort;

use crate::fs::JsonFile;

pub const DEFAULT_PROGRESS_FILE: &str = "onboarding_progress.json";

type Records = BTreeMap<String, OnboardingProgress>;

pub struct FileProgressSessionRepository {
    file: JsonFile,
    write_lock: Mutex<()>,
}

impl FileProgressSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_PROGRESS_FILE))
    }

    async fn records(&self) -> anyhow::Result<Records> {
        Ok(self.file.read::<Records>().await?.unwrap_or_default())
    }
}

#[async_trait]
impl ProgressSessionPort for FileProgressSessionRepository {
    async fn load(&self, uid: &str) -> anyhow::Result<Option<OnboardingProgress>> {
        Ok(self.records().await?.remove(uid))
    }

    async fn save(&self, uid: &str, progress: &OnboardingProgress) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.records().await?;
        records.insert(uid.to_string(), progress.clone());
        self.file.write(&records).await
    }

    async fn clear(&self, uid: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.records().await?;
        if records.remove(uid).is_none() {
            return Ok(());
        }
        if records.is_empty() {
            self.file.remove().await
        } else {
            self.file.write(&records).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_core::OnboardingStep;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_none_when_nothing_stored() {
        let dir = TempDir::new().unwrap();
        let repo = FileProgressSessionRepository::with_defaults(dir.path().to_path_buf());

        assert!(repo.load("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_and_load_per_user() {
        let dir = TempDir::new().unwrap();
        let repo = FileProgressSessionRepository::with_defaults(dir.path().to_path_buf());
        let mut progress = OnboardingProgress::default();
        progress.set_current_step(OnboardingStep::ContactInfo);
        progress.mark_step_completed(OnboardingStep::AgeVerification);

        repo.save("u1", &progress).await.unwrap();
        repo.save("u2", &OnboardingProgress::default()).await.unwrap();

        assert_eq!(repo.load("u1").await.unwrap(), Some(progress));
        assert_eq!(
            repo.load("u2").await.unwrap().map(|p| p.current_step),
            Some(OnboardingStep::VerifyEmail)
        );
    }

    #[tokio::test]
    async fn clear_removes_only_that_user() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        let repo = FileProgressSessionRepository::new(&path);
        repo.save("u1", &OnboardingProgress::default()).await.unwrap();
        repo.save("u2", &OnboardingProgress::default()).await.unwrap();

        repo.clear("u1").await.unwrap();
        assert!(repo.load("u1").await.unwrap().is_none());
        assert!(repo.load("u2").await.unwrap().is_some());

        repo.clear("u2").await.unwrap();
        assert!(!path.exists());
    }
}
