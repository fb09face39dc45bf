use std::sync::Arc;

use serde::Serialize;
use tracing::{info_span, warn, Instrument};

use kb_core::onboarding::{OnboardingStatus, OnboardingStep, ProgressSummary};
use kb_core::ports::ProfileRepositoryPort;

use super::OnboardingSession;

/// Data transfer object for onboarding status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingStatusDto {
    /// Derived from the profile; authoritative.
    pub status: OnboardingStatus,
    pub is_complete: bool,
    /// Step the wizard last showed; a hint only.
    pub current_step: OnboardingStep,
    pub progress: ProgressSummary,
    /// Later fields present while an earlier one is missing.
    pub has_gaps: bool,
}

/// Use case for reading the onboarding status of the session's user.
pub struct GetOnboardingStatus {
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl GetOnboardingStatus {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self { profiles }
    }

    pub async fn execute(&self, session: &OnboardingSession) -> anyhow::Result<OnboardingStatusDto> {
        let span = info_span!("usecase.get_onboarding_status.execute", uid = %session.uid());

        async {
            let snapshot = self
                .profiles
                .fetch_profile(session.uid())
                .await?
                .map(|doc| doc.snapshot())
                .unwrap_or_default();

            let has_gaps = snapshot.has_gaps();
            if has_gaps {
                warn!("profile has fields set out of onboarding order");
            }

            let store = session.store();
            Ok(OnboardingStatusDto {
                status: snapshot.status(),
                is_complete: snapshot.is_complete(),
                current_step: store.current_step(),
                progress: store.summary(),
                has_gaps,
            })
        }
        .instrument(span)
        .await
    }
}
