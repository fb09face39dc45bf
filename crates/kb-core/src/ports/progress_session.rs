//! Session storage port for onboarding progress
//!
//! The record survives page reloads within one browser session and is
//! cleared when onboarding finishes, restarts or the user signs out.

use async_trait::async_trait;

use crate::onboarding::OnboardingProgress;

#[async_trait]
pub trait ProgressSessionPort: Send + Sync {
    /// Load the stored progress of `uid`, `None` when nothing is stored.
    async fn load(&self, uid: &str) -> anyhow::Result<Option<OnboardingProgress>>;

    async fn save(&self, uid: &str, progress: &OnboardingProgress) -> anyhow::Result<()>;

    async fn clear(&self, uid: &str) -> anyhow::Result<()>;
}
