use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{ProfileDocument, Role};

/// Partial update of a profile document.
///
/// Only `Some` fields are written; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreed_to_terms_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_us_via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kako_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_kako_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_completed_onboarding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the fields this patch writes, in document key form.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut push = |set: bool, name: &'static str| {
            if set {
                names.push(name);
            }
        };
        push(self.is_verified.is_some(), "isVerified");
        push(self.agreed_to_terms_at.is_some(), "agreedToTermsAt");
        push(self.role.is_some(), "role");
        push(self.birth_date.is_some(), "birthDate");
        push(self.gender.is_some(), "gender");
        push(self.country.is_some(), "country");
        push(self.phone_number.is_some(), "phoneNumber");
        push(self.found_us_via.is_some(), "foundUsVia");
        push(self.kako_id.is_some(), "kakoId");
        push(self.has_kako_account.is_some(), "hasKakoAccount");
        push(self.has_completed_onboarding.is_some(), "hasCompletedOnboarding");
        push(self.updated_at.is_some(), "updatedAt");
        names
    }

    /// Writes the set fields into `doc`.
    pub fn apply_to(&self, doc: &mut ProfileDocument) {
        fn set<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        set(&mut doc.agreed_to_terms_at, &self.agreed_to_terms_at);
        set(&mut doc.role, &self.role);
        set(&mut doc.birth_date, &self.birth_date);
        set(&mut doc.gender, &self.gender);
        set(&mut doc.country, &self.country);
        set(&mut doc.phone_number, &self.phone_number);
        set(&mut doc.found_us_via, &self.found_us_via);
        set(&mut doc.kako_id, &self.kako_id);
        set(&mut doc.has_kako_account, &self.has_kako_account);
        set(&mut doc.updated_at, &self.updated_at);
        if let Some(verified) = self.is_verified {
            doc.is_verified = verified;
        }
        if let Some(done) = self.has_completed_onboarding {
            doc.has_completed_onboarding = done;
        }
    }
}
