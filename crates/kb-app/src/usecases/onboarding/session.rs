use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use kb_core::onboarding::{OnboardingProgress, OnboardingStep, ProgressSummary};
use kb_core::ports::ProgressSessionPort;

/// Synchronous holder of one session's onboarding progress.
///
/// Every operation is a local mutation that is visible to the next read.
/// None of them fail.
#[derive(Debug, Default)]
pub struct ProgressStore {
    state: Mutex<OnboardingProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_progress(progress: OnboardingProgress) -> Self {
        Self {
            state: Mutex::new(progress),
        }
    }

    fn state(&self) -> MutexGuard<'_, OnboardingProgress> {
        // Plain data: a poisoned lock still holds a consistent value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_current_step(&self, step: OnboardingStep) {
        self.state().set_current_step(step);
    }

    pub fn mark_step_completed(&self, step: OnboardingStep) {
        self.state().mark_step_completed(step);
    }

    /// Takes the in-flight guard; `false` means another transition is
    /// pending and the caller must drop its action.
    pub fn start_navigation(&self, action: Option<&str>) -> bool {
        self.state().start_navigation(action)
    }

    pub fn reset_navigation(&self) {
        self.state().reset_navigation();
    }

    pub fn reset_store(&self) {
        self.state().reset();
    }

    pub fn is_in_flight(&self) -> bool {
        self.state().is_in_flight()
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.state().current_step
    }

    pub fn is_step_completed(&self, step: OnboardingStep) -> bool {
        self.state().is_step_completed(step)
    }

    pub fn summary(&self) -> ProgressSummary {
        self.state().summary()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> OnboardingProgress {
        self.state().clone()
    }
}

/// One user's pass through the onboarding wizard.
///
/// Created when the user enters onboarding, torn down when it finishes or
/// the user signs out. Owns the [`ProgressStore`] and mirrors it into session
/// storage so a reload restores the wizard position. The stored record is a
/// hint only; gates always re-derive from the profile.
pub struct OnboardingSession {
    uid: String,
    store: ProgressStore,
    persistence: Arc<dyn ProgressSessionPort>,
}

impl OnboardingSession {
    /// Opens the session of `uid`, restoring stored progress when present.
    ///
    /// A record that cannot be read is discarded and the session starts
    /// empty.
    pub async fn open(uid: impl Into<String>, persistence: Arc<dyn ProgressSessionPort>) -> Self {
        let uid = uid.into();
        let progress = match persistence.load(&uid).await {
            Ok(Some(mut progress)) => {
                // Saves do not survive a reload.
                progress.reset_navigation();
                debug!(uid = %uid, current_step = %progress.current_step, "restored onboarding progress");
                progress
            }
            Ok(None) => OnboardingProgress::default(),
            Err(err) => {
                warn!(uid = %uid, error = %err, "failed to restore onboarding progress, starting empty");
                OnboardingProgress::default()
            }
        };

        Self {
            uid,
            store: ProgressStore::from_progress(progress),
            persistence,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Writes the current progress to session storage.
    pub async fn persist(&self) -> anyhow::Result<()> {
        let mut progress = self.store.snapshot();
        progress.reset_navigation();
        self.persistence.save(&self.uid, &progress).await
    }

    /// Clears progress so onboarding starts over from an empty store.
    pub async fn restart(&self) -> anyhow::Result<()> {
        debug!(uid = %self.uid, "restarting onboarding progress");
        self.clear().await
    }

    /// Tears the progress down once the profile reports onboarding complete.
    pub async fn finish(&self) -> anyhow::Result<()> {
        debug!(uid = %self.uid, "onboarding finished, clearing progress");
        self.clear().await
    }

    /// Ends the session when the user signs out.
    pub async fn close(self) -> anyhow::Result<()> {
        self.clear().await
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.store.reset_store();
        self.persistence.clear(&self.uid).await
    }
}
