//! Route gate decisions.
//!
//! Pure decision functions shared by every protected page and by the
//! onboarding pages themselves. IO (identity lookup, profile fetch,
//! navigation) happens in the application layer; this module only decides.

use serde::Serialize;

use crate::access::AccessPolicy;
use crate::config::RoutesConfig;
use crate::onboarding::{OnboardingStatus, OnboardingStep};
use crate::profile::{Identity, ProfileDocument, ProfileSnapshot};

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// Identity or profile still loading; show the blocking loader.
    Checking,
    /// No authenticated user.
    RedirectToSignIn { target: String },
    /// Onboarding incomplete; send the user to the pending step.
    RedirectToStep { step: OnboardingStep, target: String },
    /// Admin level missing or too low.
    RedirectUnauthorized { target: String },
    /// Onboarding page visited by a user who already finished.
    RedirectHome { target: String },
    /// Render the page.
    Allow,
}

impl GateDecision {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GateDecision::RedirectToSignIn { target }
            | GateDecision::RedirectToStep { target, .. }
            | GateDecision::RedirectUnauthorized { target }
            | GateDecision::RedirectHome { target } => Some(target),
            GateDecision::Checking | GateDecision::Allow => None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Everything a gate check looks at, fetched by the caller.
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub identity: Option<&'a Identity>,
    /// `None` when the user has no profile document yet.
    pub profile: Option<&'a ProfileDocument>,
    pub requested_path: &'a str,
}

impl GateInput<'_> {
    fn snapshot(&self) -> ProfileSnapshot {
        self.profile
            .map(ProfileDocument::snapshot)
            .unwrap_or_else(ProfileSnapshot::empty)
    }
}

/// Sign-in location carrying the originally requested path.
pub fn sign_in_target(routes: &RoutesConfig, return_to: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
    format!("{}?redirect={}", routes.sign_in, encoded)
}

/// Gate for pages that require a complete profile.
///
/// Checks run in order: authentication, onboarding completion, admin level.
pub fn decide_page(input: &GateInput<'_>, policy: &AccessPolicy, routes: &RoutesConfig) -> GateDecision {
    if input.identity.is_none() {
        return GateDecision::RedirectToSignIn {
            target: sign_in_target(routes, input.requested_path),
        };
    }

    if let OnboardingStatus::Pending(step) = input.snapshot().status() {
        return GateDecision::RedirectToStep {
            step,
            target: step.path(&routes.onboarding_base),
        };
    }

    let admin_level = input.profile.and_then(|p| p.admin_level);
    if !policy.permits(admin_level) {
        return GateDecision::RedirectUnauthorized {
            target: routes.unauthorized.clone(),
        };
    }

    GateDecision::Allow
}

/// Gate for an onboarding step page.
///
/// Finished users go home; everyone else is kept on the resolved step so the
/// wizard cannot be skipped ahead or replayed.
pub fn decide_onboarding_page(
    page: OnboardingStep,
    input: &GateInput<'_>,
    routes: &RoutesConfig,
) -> GateDecision {
    if input.identity.is_none() {
        return GateDecision::RedirectToSignIn {
            target: sign_in_target(routes, input.requested_path),
        };
    }

    match input.snapshot().status() {
        OnboardingStatus::Complete => GateDecision::RedirectHome {
            target: routes.home.clone(),
        },
        OnboardingStatus::Pending(step) if step == page => GateDecision::Allow,
        OnboardingStatus::Pending(step) => GateDecision::RedirectToStep {
            step,
            target: step.path(&routes.onboarding_base),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AdminLevel;
    use crate::config::AppConfig;
    use crate::profile::Role;
    use chrono::{NaiveDate, Utc};

    fn routes() -> RoutesConfig {
        AppConfig::default().routes
    }

    fn complete_profile() -> ProfileDocument {
        ProfileDocument {
            uid: "u1".into(),
            is_verified: true,
            agreed_to_terms_at: Some(Utc::now()),
            role: Some(Role::Player),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
            gender: Some("female".into()),
            country: Some("Brasil".into()),
            phone_number: Some("+5511987654321".into()),
            found_us_via: Some("instagram".into()),
            has_completed_onboarding: true,
            ..Default::default()
        }
    }

    #[test]
    fn anonymous_user_goes_to_sign_in_with_return_target() {
        let input = GateInput {
            identity: None,
            profile: None,
            requested_path: "/bingo/rooms?id=7",
        };
        assert_eq!(
            decide_page(&input, &AccessPolicy::onboarded(), &routes()),
            GateDecision::RedirectToSignIn {
                target: "/sign-in?redirect=%2Fbingo%2Frooms%3Fid%3D7".into()
            }
        );
    }

    #[test]
    fn missing_profile_document_resolves_to_first_step() {
        let identity = Identity::new("u1");
        let input = GateInput {
            identity: Some(&identity),
            profile: None,
            requested_path: "/dashboard",
        };
        assert_eq!(
            decide_page(&input, &AccessPolicy::onboarded(), &routes()),
            GateDecision::RedirectToStep {
                step: OnboardingStep::VerifyEmail,
                target: "/onboarding/verify-email".into()
            }
        );
    }

    #[test]
    fn incomplete_profile_wins_over_admin_check() {
        let identity = Identity::new("u1");
        let mut profile = complete_profile();
        profile.phone_number = None;
        profile.admin_level = Some(AdminLevel::Master);
        let input = GateInput {
            identity: Some(&identity),
            profile: Some(&profile),
            requested_path: "/admin",
        };
        assert_eq!(
            decide_page(&input, &AccessPolicy::admin(AdminLevel::Admin), &routes()),
            GateDecision::RedirectToStep {
                step: OnboardingStep::ContactInfo,
                target: "/onboarding/contact-info".into()
            }
        );
    }

    #[test]
    fn admin_pages_require_sufficient_level() {
        let identity = Identity::new("u1");
        let policy = AccessPolicy::admin(AdminLevel::Admin);
        let decide_with = |level: Option<AdminLevel>| {
            let mut profile = complete_profile();
            profile.admin_level = level;
            let input = GateInput {
                identity: Some(&identity),
                profile: Some(&profile),
                requested_path: "/admin/users",
            };
            decide_page(&input, &policy, &routes())
        };

        assert_eq!(
            decide_with(None),
            GateDecision::RedirectUnauthorized {
                target: "/unauthorized".into()
            }
        );
        assert!(!decide_with(Some(AdminLevel::Suporte)).is_allowed());
        assert!(decide_with(Some(AdminLevel::Admin)).is_allowed());
        assert!(decide_with(Some(AdminLevel::Master)).is_allowed());
    }

    #[test]
    fn complete_profile_renders_page() {
        let identity = Identity::new("u1");
        let profile = complete_profile();
        let input = GateInput {
            identity: Some(&identity),
            profile: Some(&profile),
            requested_path: "/dashboard",
        };
        let decision = decide_page(&input, &AccessPolicy::onboarded(), &routes());
        assert_eq!(decision, GateDecision::Allow);
        assert_eq!(decision.redirect_target(), None);
    }

    #[test]
    fn onboarding_page_keeps_user_on_resolved_step() {
        let identity = Identity::new("u1");
        let mut profile = complete_profile();
        profile.has_completed_onboarding = false;
        profile.role = Some(Role::Host);
        let input = GateInput {
            identity: Some(&identity),
            profile: Some(&profile),
            requested_path: "/onboarding/terms",
        };

        assert_eq!(
            decide_onboarding_page(OnboardingStep::Terms, &input, &routes()),
            GateDecision::RedirectToStep {
                step: OnboardingStep::KakoIdInput,
                target: "/onboarding/kako-id-input".into()
            }
        );
        assert!(decide_onboarding_page(OnboardingStep::KakoIdInput, &input, &routes()).is_allowed());
    }

    #[test]
    fn finished_user_on_onboarding_page_goes_home() {
        let identity = Identity::new("u1");
        let profile = complete_profile();
        let input = GateInput {
            identity: Some(&identity),
            profile: Some(&profile),
            requested_path: "/onboarding/terms",
        };
        assert_eq!(
            decide_onboarding_page(OnboardingStep::Terms, &input, &routes()),
            GateDecision::RedirectHome {
                target: "/dashboard".into()
            }
        );
    }
}
