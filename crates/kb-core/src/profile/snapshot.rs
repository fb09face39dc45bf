use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{is_filled, ProfileDocument, Role};
use crate::onboarding::{self, OnboardingStatus};

/// Read-only view of the onboarding-relevant profile fields, taken at one
/// point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileSnapshot {
    pub role: Option<Role>,
    pub is_verified: bool,
    pub agreed_to_terms_at: Option<DateTime<Utc>>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub found_us_via: Option<String>,
    pub has_completed_onboarding: bool,
}

impl ProfileSnapshot {
    /// Snapshot of a user with no profile document yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        onboarding::is_complete(self)
    }

    /// Resolves the onboarding status once; callers match on the result
    /// instead of re-checking individual fields.
    pub fn status(&self) -> OnboardingStatus {
        onboarding::next_step(self)
    }

    pub(crate) fn has_demographics(&self) -> bool {
        self.birth_date.is_some() && is_filled(&self.gender) && is_filled(&self.country)
    }

    pub(crate) fn has_contact_info(&self) -> bool {
        is_filled(&self.phone_number) && is_filled(&self.found_us_via)
    }

    /// Reports whether a later waterfall field is set while an earlier one is
    /// missing. Such profiles are resolved to the earliest missing step.
    pub fn has_gaps(&self) -> bool {
        let filled = [
            self.is_verified,
            self.agreed_to_terms_at.is_some(),
            self.role.is_some(),
            self.has_demographics(),
            self.has_contact_info(),
            self.has_completed_onboarding,
        ];
        filled
            .iter()
            .skip_while(|done| **done)
            .any(|done| *done)
    }
}

impl From<&ProfileDocument> for ProfileSnapshot {
    fn from(doc: &ProfileDocument) -> Self {
        Self {
            role: doc.role,
            is_verified: doc.is_verified,
            agreed_to_terms_at: doc.agreed_to_terms_at,
            birth_date: doc.birth_date,
            gender: doc.gender.clone(),
            country: doc.country.clone(),
            phone_number: doc.phone_number.clone(),
            found_us_via: doc.found_us_via.clone(),
            has_completed_onboarding: doc.has_completed_onboarding,
        }
    }
}
