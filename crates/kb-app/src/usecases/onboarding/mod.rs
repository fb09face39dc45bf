//! Onboarding use cases
//!
//! This module contains the session-scoped progress store, the submission
//! flow shared by every step page, and the status query used by the wizard.

pub mod get_status;
pub mod session;
pub mod submit_step;

pub use get_status::{GetOnboardingStatus, OnboardingStatusDto};
pub use session::{OnboardingSession, ProgressStore};
pub use submit_step::{SubmitOnboardingStep, SubmitOutcome, SubmitStepError};
