//! Completion predicate and step resolver.
//!
//! Both functions are pure and total: absent or malformed fields read as
//! "requirement not met" and never produce an error.

use serde::Serialize;

use super::OnboardingStep;
use crate::profile::{is_filled, ProfileSnapshot, Role};

/// Result of resolving a snapshot against the onboarding waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "step", rename_all = "snake_case")]
pub enum OnboardingStatus {
    /// The first unmet requirement.
    Pending(OnboardingStep),
    /// Every requirement is met; callers must not redirect.
    Complete,
}

impl OnboardingStatus {
    pub fn pending_step(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStatus::Pending(step) => Some(*step),
            OnboardingStatus::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, OnboardingStatus::Complete)
    }
}

/// Returns true only when every required profile field is present and truthy.
pub fn is_complete(snapshot: &ProfileSnapshot) -> bool {
    snapshot.is_verified
        && snapshot.agreed_to_terms_at.is_some()
        && snapshot.role.is_some()
        && snapshot.birth_date.is_some()
        && is_filled(&snapshot.gender)
        && is_filled(&snapshot.country)
        && is_filled(&snapshot.phone_number)
        && is_filled(&snapshot.found_us_via)
        && snapshot.has_completed_onboarding
}

/// Returns the first unmet requirement of the waterfall.
///
/// Checks run in a fixed order and stop at the first failure; later pages
/// rely on every earlier field being present.
pub fn next_step(snapshot: &ProfileSnapshot) -> OnboardingStatus {
    if !snapshot.is_verified {
        return OnboardingStatus::Pending(OnboardingStep::VerifyEmail);
    }
    if snapshot.agreed_to_terms_at.is_none() {
        return OnboardingStatus::Pending(OnboardingStep::Terms);
    }
    if snapshot.role.is_none() {
        return OnboardingStatus::Pending(OnboardingStep::RoleSelection);
    }
    if !snapshot.has_demographics() {
        return OnboardingStatus::Pending(OnboardingStep::AgeVerification);
    }
    if !snapshot.has_contact_info() {
        return OnboardingStatus::Pending(OnboardingStep::ContactInfo);
    }
    if !snapshot.has_completed_onboarding {
        let step = match snapshot.role {
            Some(Role::Host) => OnboardingStep::KakoIdInput,
            _ => OnboardingStep::KakoAccountCheck,
        };
        return OnboardingStatus::Pending(step);
    }
    OnboardingStatus::Complete
}
