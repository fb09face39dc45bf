use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

use kb_core::onboarding::{
    OnboardingStatus, OnboardingStep, StepSubmission, StepValidationError, SubmissionContext,
};
use kb_core::ports::{
    ClockPort, IdentityPort, NavigatorPort, Notice, NoticePort, ProfileRepositoryPort,
    ServiceError,
};
use kb_core::{AppConfig, ProfileDocument};

use super::OnboardingSession;

/// Errors produced by a step submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitStepError {
    #[error("invalid submission: {0}")]
    Invalid(#[from] StepValidationError),
    #[error("no authenticated user")]
    Unauthenticated,
    #[error("session belongs to another user")]
    SessionMismatch,
    #[error("step {submitted} submitted while the profile is at {expected:?}")]
    StepMismatch {
        submitted: OnboardingStep,
        expected: OnboardingStatus,
    },
    #[error("load profile failed: {0}")]
    Load(#[source] ServiceError),
    #[error("save step failed: {0}")]
    Save(#[source] ServiceError),
}

/// Result of a submission that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing was written.
    Ignored,
    /// The step was saved and the user was sent on.
    Advanced {
        completed: OnboardingStep,
        next: OnboardingStatus,
        target: String,
    },
}

/// Use case behind every onboarding step's submit control.
///
/// ## Behavior
/// - Drops the submission when another one is in flight (no write)
/// - Validates the form input and refuses any step other than the pending one
/// - Merges the step's fields into the profile
/// - Marks the step completed only after the write succeeded
/// - Navigates to the next pending step, or home after the final step with
///   a welcome notice
/// - On failure: shows a notice and releases the guard so the user can retry
pub struct SubmitOnboardingStep {
    identity: Arc<dyn IdentityPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    navigator: Arc<dyn NavigatorPort>,
    notices: Arc<dyn NoticePort>,
    clock: Arc<dyn ClockPort>,
    config: Arc<AppConfig>,
}

impl SubmitOnboardingStep {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        navigator: Arc<dyn NavigatorPort>,
        notices: Arc<dyn NoticePort>,
        clock: Arc<dyn ClockPort>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            identity,
            profiles,
            navigator,
            notices,
            clock,
            config,
        }
    }

    pub async fn execute(
        &self,
        session: &OnboardingSession,
        submission: StepSubmission,
    ) -> Result<SubmitOutcome, SubmitStepError> {
        let step = submission.step();
        let span = info_span!(
            "usecase.submit_onboarding_step.execute",
            uid = %session.uid(),
            step = %step
        );

        async {
            let store = session.store();
            if !store.start_navigation(Some(step.as_str())) {
                debug!("submission dropped, another transition is in flight");
                return Ok(SubmitOutcome::Ignored);
            }

            match self.save_and_advance(session, step, submission).await {
                Ok(outcome) => {
                    store.reset_navigation();
                    Ok(outcome)
                }
                Err(err) => {
                    warn!(error = %err, "onboarding step submission failed");
                    store.reset_navigation();
                    self.notices.notify(notice_for(&err));
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn save_and_advance(
        &self,
        session: &OnboardingSession,
        step: OnboardingStep,
        submission: StepSubmission,
    ) -> Result<SubmitOutcome, SubmitStepError> {
        let identity = self
            .identity
            .current_identity()
            .await
            .map_err(SubmitStepError::Load)?
            .ok_or(SubmitStepError::Unauthenticated)?;
        if identity.uid != session.uid() {
            return Err(SubmitStepError::SessionMismatch);
        }

        let ctx = SubmissionContext {
            now: self.clock.now(),
            minimum_age: self.config.onboarding.minimum_age,
            email_verified: identity.email_verified,
        };
        let patch = submission.into_patch(&ctx)?;

        let mut expected = self
            .profiles
            .fetch_profile(&identity.uid)
            .await
            .map_err(SubmitStepError::Load)?
            .unwrap_or_else(|| ProfileDocument::new(identity.uid.clone()));

        let expected_status = expected.snapshot().status();
        if expected_status.pending_step() != Some(step) {
            return Err(SubmitStepError::StepMismatch {
                submitted: step,
                expected: expected_status,
            });
        }

        self.profiles
            .update_fields(&identity.uid, &patch)
            .await
            .map_err(SubmitStepError::Save)?;

        info!(fields = ?patch.field_names(), "onboarding step saved");

        let store = session.store();
        store.mark_step_completed(step);

        // The write merged the same fields, so the stored document now
        // matches the local copy.
        patch.apply_to(&mut expected);
        let next = expected.snapshot().status();

        let target = match next {
            OnboardingStatus::Pending(next_step) => {
                store.set_current_step(next_step);
                if let Err(err) = session.persist().await {
                    warn!(error = %err, "failed to persist onboarding progress");
                }
                next_step.path(&self.config.routes.onboarding_base)
            }
            OnboardingStatus::Complete => {
                if let Err(err) = session.finish().await {
                    warn!(error = %err, "failed to clear onboarding progress");
                }
                self.notices
                    .notify(Notice::info("Your profile is complete. Welcome to KakoBingo!"));
                self.config.routes.home.clone()
            }
        };

        info!(next = ?next, target = %target, "advancing onboarding");
        self.navigator.push(&target);

        Ok(SubmitOutcome::Advanced {
            completed: step,
            next,
            target,
        })
    }
}

fn notice_for(err: &SubmitStepError) -> Notice {
    match err {
        SubmitStepError::Invalid(reason) => Notice::save_failed(reason.to_string()),
        SubmitStepError::Load(_) => {
            Notice::load_failed("We could not load your profile. Please try again.")
        }
        SubmitStepError::Unauthenticated | SubmitStepError::SessionMismatch => {
            Notice::save_failed("Your session has ended. Please sign in again.")
        }
        SubmitStepError::StepMismatch { .. } => {
            Notice::save_failed("This step is not available. Continue where you left off.")
        }
        SubmitStepError::Save(_) => {
            Notice::save_failed("We could not save this step. Please try again.")
        }
    }
}
