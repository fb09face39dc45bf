use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of one onboarding page.
///
/// Variants are declared in waterfall order, so `Ord` follows the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    VerifyEmail,
    Terms,
    RoleSelection,
    AgeVerification,
    ContactInfo,
    /// Final step for hosts.
    KakoIdInput,
    /// Final step for players.
    KakoAccountCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown onboarding step: {0}")]
pub struct ParseStepError(pub String);

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 7] = [
        OnboardingStep::VerifyEmail,
        OnboardingStep::Terms,
        OnboardingStep::RoleSelection,
        OnboardingStep::AgeVerification,
        OnboardingStep::ContactInfo,
        OnboardingStep::KakoIdInput,
        OnboardingStep::KakoAccountCheck,
    ];

    /// Number of steps any single user walks through (one final step per role).
    pub const FLOW_LENGTH: usize = 6;

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStep::VerifyEmail => "verify-email",
            OnboardingStep::Terms => "terms",
            OnboardingStep::RoleSelection => "role-selection",
            OnboardingStep::AgeVerification => "age-verification",
            OnboardingStep::ContactInfo => "contact-info",
            OnboardingStep::KakoIdInput => "kako-id-input",
            OnboardingStep::KakoAccountCheck => "kako-account-check",
        }
    }

    /// 1-based position in the flow, as shown in the wizard header.
    pub fn position(&self) -> usize {
        match self {
            OnboardingStep::VerifyEmail => 1,
            OnboardingStep::Terms => 2,
            OnboardingStep::RoleSelection => 3,
            OnboardingStep::AgeVerification => 4,
            OnboardingStep::ContactInfo => 5,
            OnboardingStep::KakoIdInput | OnboardingStep::KakoAccountCheck => 6,
        }
    }

    /// Whether completing this step finishes onboarding.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OnboardingStep::KakoIdInput | OnboardingStep::KakoAccountCheck
        )
    }

    /// Route of this step under the onboarding base path.
    pub fn path(&self, onboarding_base: &str) -> String {
        format!("{}/{}", onboarding_base.trim_end_matches('/'), self.as_str())
    }

    /// Recognizes a step from a request path under `onboarding_base`.
    pub fn from_path(path: &str, onboarding_base: &str) -> Option<Self> {
        let base = onboarding_base.trim_end_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.strip_prefix(base)?.strip_prefix('/')?;
        rest.trim_end_matches('/').parse().ok()
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnboardingStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ParseStepError(s.to_string()))
    }
}
