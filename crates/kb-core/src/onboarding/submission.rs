//! Per-step form submissions.
//!
//! A submission is validated locally and turned into the profile patch its
//! page writes. Validation failures never reach the profile service.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::OnboardingStep;
use crate::profile::{ProfilePatch, Role};

/// Form input of one onboarding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum StepSubmission {
    /// The identity service reports the email as verified.
    VerifyEmail,
    Terms {
        accepted: bool,
    },
    RoleSelection {
        role: Role,
    },
    AgeVerification {
        birth_date: NaiveDate,
        gender: String,
        country: String,
    },
    ContactInfo {
        phone_number: String,
        found_us_via: String,
    },
    KakoIdInput {
        kako_id: String,
    },
    KakoAccountCheck {
        has_account: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepValidationError {
    #[error("email address has not been verified yet")]
    EmailNotVerified,
    #[error("terms of use must be accepted")]
    TermsNotAccepted,
    #[error("birth date lies in the future")]
    BirthDateInFuture,
    #[error("minimum age is {minimum_age}, got {age}")]
    Underage { minimum_age: u32, age: u32 },
    #[error("field `{0}` must not be blank")]
    Blank(&'static str),
}

/// Facts a submission is checked against.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionContext {
    pub now: DateTime<Utc>,
    pub minimum_age: u32,
    pub email_verified: bool,
}

impl StepSubmission {
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepSubmission::VerifyEmail => OnboardingStep::VerifyEmail,
            StepSubmission::Terms { .. } => OnboardingStep::Terms,
            StepSubmission::RoleSelection { .. } => OnboardingStep::RoleSelection,
            StepSubmission::AgeVerification { .. } => OnboardingStep::AgeVerification,
            StepSubmission::ContactInfo { .. } => OnboardingStep::ContactInfo,
            StepSubmission::KakoIdInput { .. } => OnboardingStep::KakoIdInput,
            StepSubmission::KakoAccountCheck { .. } => OnboardingStep::KakoAccountCheck,
        }
    }

    /// Validates the input and builds the patch to write.
    pub fn into_patch(self, ctx: &SubmissionContext) -> Result<ProfilePatch, StepValidationError> {
        let mut patch = ProfilePatch {
            updated_at: Some(ctx.now),
            ..Default::default()
        };

        match self {
            StepSubmission::VerifyEmail => {
                if !ctx.email_verified {
                    return Err(StepValidationError::EmailNotVerified);
                }
                patch.is_verified = Some(true);
            }
            StepSubmission::Terms { accepted } => {
                if !accepted {
                    return Err(StepValidationError::TermsNotAccepted);
                }
                patch.agreed_to_terms_at = Some(ctx.now);
            }
            StepSubmission::RoleSelection { role } => {
                patch.role = Some(role);
            }
            StepSubmission::AgeVerification {
                birth_date,
                gender,
                country,
            } => {
                let age = age_on(birth_date, ctx.now.date_naive())
                    .ok_or(StepValidationError::BirthDateInFuture)?;
                if age < ctx.minimum_age {
                    return Err(StepValidationError::Underage {
                        minimum_age: ctx.minimum_age,
                        age,
                    });
                }
                patch.birth_date = Some(birth_date);
                patch.gender = Some(required(gender, "gender")?);
                patch.country = Some(required(country, "country")?);
            }
            StepSubmission::ContactInfo {
                phone_number,
                found_us_via,
            } => {
                patch.phone_number = Some(required(phone_number, "phoneNumber")?);
                patch.found_us_via = Some(required(found_us_via, "foundUsVia")?);
            }
            StepSubmission::KakoIdInput { kako_id } => {
                patch.kako_id = Some(required(kako_id, "kakoId")?);
                patch.has_completed_onboarding = Some(true);
            }
            StepSubmission::KakoAccountCheck { has_account } => {
                patch.has_kako_account = Some(has_account);
                patch.has_completed_onboarding = Some(true);
            }
        }

        Ok(patch)
    }
}

fn required(value: String, field: &'static str) -> Result<String, StepValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StepValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}

/// Full years between `birth_date` and `today`; `None` for future dates.
fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth_date > today {
        return None;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
