//! Onboarding domain models
//!
//! This module defines the onboarding waterfall: the ordered steps a new user
//! walks through, the pure rules that decide which step is pending, the
//! session-scoped progress model used by the wizard UI, and the per-step
//! submissions that turn form input into profile writes.

mod progress;
mod resolver;
mod step;
mod submission;

pub use progress::{OnboardingProgress, ProgressSummary};
pub use resolver::{is_complete, next_step, OnboardingStatus};
pub use step::{OnboardingStep, ParseStepError};
pub use submission::{StepSubmission, StepValidationError, SubmissionContext};
