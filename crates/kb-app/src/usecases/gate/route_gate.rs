use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use kb_core::gate::{self, GateDecision, GateInput};
use kb_core::ports::{IdentityPort, NavigatorPort, Notice, NoticePort, ProfileRepositoryPort, ServiceError};
use kb_core::{AccessPolicy, AppConfig, Identity, OnboardingStep, ProfileDocument};

/// Guard run when a page loads.
///
/// Fetch failures fail closed: the user is sent to sign-in and never sees
/// protected content.
pub struct RouteGate {
    identity: Arc<dyn IdentityPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    navigator: Arc<dyn NavigatorPort>,
    notices: Arc<dyn NoticePort>,
    config: Arc<AppConfig>,
}

impl RouteGate {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        navigator: Arc<dyn NavigatorPort>,
        notices: Arc<dyn NoticePort>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            identity,
            profiles,
            navigator,
            notices,
            config,
        }
    }

    /// Gate for a page that requires a complete profile and, optionally, a
    /// minimum admin level.
    pub async fn check_page(&self, requested_path: &str, policy: AccessPolicy) -> GateDecision {
        let span = info_span!(
            "usecase.route_gate.check_page",
            path = %requested_path,
            min_admin_level = ?policy.min_admin_level
        );

        async {
            let decision = match self.load().await {
                Ok((identity, profile)) => {
                    let input = GateInput {
                        identity: identity.as_ref(),
                        profile: profile.as_ref(),
                        requested_path,
                    };
                    gate::decide_page(&input, &policy, &self.config.routes)
                }
                Err(err) => self.fail_closed(requested_path, &err),
            };
            self.apply(&decision);
            decision
        }
        .instrument(span)
        .await
    }

    /// Gate for the onboarding step page `page`.
    pub async fn check_onboarding_page(
        &self,
        page: OnboardingStep,
        requested_path: &str,
    ) -> GateDecision {
        let span = info_span!(
            "usecase.route_gate.check_onboarding_page",
            page = %page,
            path = %requested_path
        );

        async {
            let decision = match self.load().await {
                Ok((identity, profile)) => {
                    let input = GateInput {
                        identity: identity.as_ref(),
                        profile: profile.as_ref(),
                        requested_path,
                    };
                    gate::decide_onboarding_page(page, &input, &self.config.routes)
                }
                Err(err) => self.fail_closed(requested_path, &err),
            };
            self.apply(&decision);
            decision
        }
        .instrument(span)
        .await
    }

    async fn load(&self) -> Result<(Option<Identity>, Option<ProfileDocument>), ServiceError> {
        let Some(identity) = self.identity.current_identity().await? else {
            return Ok((None, None));
        };
        let profile = self.profiles.fetch_profile(&identity.uid).await?;
        if let Some(doc) = &profile {
            if doc.snapshot().has_gaps() {
                warn!(uid = %identity.uid, "profile has fields set out of onboarding order");
            }
        }
        Ok((Some(identity), profile))
    }

    fn fail_closed(&self, requested_path: &str, err: &ServiceError) -> GateDecision {
        warn!(error = %err, retryable = err.is_retryable(), "gate could not load profile");
        self.notices.notify(Notice::load_failed(
            "We could not load your profile. Please try again.",
        ));
        GateDecision::RedirectToSignIn {
            target: gate::sign_in_target(&self.config.routes, requested_path),
        }
    }

    fn apply(&self, decision: &GateDecision) {
        match decision.redirect_target() {
            Some(target) => {
                info!(decision = ?decision, "gate redirect");
                self.navigator.replace(target);
            }
            None => info!("gate allowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use kb_core::{AdminLevel, ProfilePatch, Role};

    mockall::mock! {
        pub Navigator {}

        impl NavigatorPort for Navigator {
            fn push(&self, path: &str);
            fn replace(&self, path: &str);
        }
    }

    mockall::mock! {
        pub Notices {}

        impl NoticePort for Notices {
            fn notify(&self, notice: Notice);
        }
    }

    struct StubIdentity(Option<Identity>);

    #[async_trait]
    impl IdentityPort for StubIdentity {
        async fn current_identity(&self) -> Result<Option<Identity>, ServiceError> {
            Ok(self.0.clone())
        }
    }

    struct StubProfiles(Result<Option<ProfileDocument>, ServiceError>);

    #[async_trait]
    impl ProfileRepositoryPort for StubProfiles {
        async fn fetch_profile(&self, _uid: &str) -> Result<Option<ProfileDocument>, ServiceError> {
            self.0.clone()
        }

        async fn update_fields(&self, _uid: &str, _patch: &ProfilePatch) -> Result<(), ServiceError> {
            panic!("the gate must never write the profile");
        }
    }

    fn complete_profile(uid: &str) -> ProfileDocument {
        ProfileDocument {
            uid: uid.into(),
            is_verified: true,
            agreed_to_terms_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single(),
            role: Some(Role::Player),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
            gender: Some("female".into()),
            country: Some("Brasil".into()),
            phone_number: Some("+5511999999999".into()),
            found_us_via: Some("instagram".into()),
            has_kako_account: Some(true),
            has_completed_onboarding: true,
            ..Default::default()
        }
    }

    fn gate(
        identity: Option<Identity>,
        profile: Result<Option<ProfileDocument>, ServiceError>,
        navigator: MockNavigator,
        notices: MockNotices,
    ) -> RouteGate {
        RouteGate::new(
            Arc::new(StubIdentity(identity)),
            Arc::new(StubProfiles(profile)),
            Arc::new(navigator),
            Arc::new(notices),
            Arc::new(AppConfig::default()),
        )
    }

    fn expect_replace(target: &'static str) -> MockNavigator {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .withf(move |path| path == target)
            .times(1)
            .return_const(());
        navigator.expect_push().never();
        navigator
    }

    fn silent_notices() -> MockNotices {
        let mut notices = MockNotices::new();
        notices.expect_notify().never();
        notices
    }

    #[tokio::test]
    async fn signed_out_user_goes_to_sign_in_with_return_target() {
        let gate = gate(
            None,
            Ok(None),
            expect_replace("/sign-in?redirect=%2Fbingo%2Fcards"),
            silent_notices(),
        );

        let decision = gate.check_page("/bingo/cards", AccessPolicy::onboarded()).await;

        assert!(matches!(decision, GateDecision::RedirectToSignIn { .. }));
    }

    #[tokio::test]
    async fn complete_profile_renders_without_navigation() {
        let mut navigator = MockNavigator::new();
        navigator.expect_push().never();
        navigator.expect_replace().never();
        let gate = gate(
            Some(Identity::new("u1")),
            Ok(Some(complete_profile("u1"))),
            navigator,
            silent_notices(),
        );

        let decision = gate.check_page("/dashboard", AccessPolicy::onboarded()).await;

        assert_eq!(decision, GateDecision::Allow);
    }

    #[tokio::test]
    async fn missing_profile_document_starts_at_verify_email() {
        let gate = gate(
            Some(Identity::new("u1")),
            Ok(None),
            expect_replace("/onboarding/verify-email"),
            silent_notices(),
        );

        let decision = gate.check_page("/dashboard", AccessPolicy::onboarded()).await;

        assert_eq!(
            decision,
            GateDecision::RedirectToStep {
                step: OnboardingStep::VerifyEmail,
                target: "/onboarding/verify-email".into(),
            }
        );
    }

    #[tokio::test]
    async fn low_admin_level_is_unauthorized() {
        let mut profile = complete_profile("u1");
        profile.admin_level = Some(AdminLevel::Suporte);
        let gate = gate(
            Some(Identity::new("u1")),
            Ok(Some(profile)),
            expect_replace("/unauthorized"),
            silent_notices(),
        );

        let decision = gate
            .check_page("/admin/users", AccessPolicy::admin(AdminLevel::Admin))
            .await;

        assert!(matches!(decision, GateDecision::RedirectUnauthorized { .. }));
    }

    #[tokio::test]
    async fn fetch_failure_fails_closed_with_retryable_notice() {
        let mut notices = MockNotices::new();
        notices
            .expect_notify()
            .withf(|notice| notice.retryable && !notice.dismissable)
            .times(1)
            .return_const(());
        let gate = gate(
            Some(Identity::new("u1")),
            Err(ServiceError::Unavailable("timeout".into())),
            expect_replace("/sign-in?redirect=%2Fdashboard"),
            notices,
        );

        let decision = gate.check_page("/dashboard", AccessPolicy::onboarded()).await;

        assert!(!decision.is_allowed());
    }

    #[tokio::test]
    async fn finished_user_on_step_page_goes_home() {
        let gate = gate(
            Some(Identity::new("u1")),
            Ok(Some(complete_profile("u1"))),
            expect_replace("/dashboard"),
            silent_notices(),
        );

        let decision = gate
            .check_onboarding_page(OnboardingStep::Terms, "/onboarding/terms")
            .await;

        assert!(matches!(decision, GateDecision::RedirectHome { .. }));
    }

    #[tokio::test]
    async fn skipping_ahead_is_sent_back_to_pending_step() {
        let profile = ProfileDocument {
            uid: "u1".into(),
            is_verified: true,
            ..Default::default()
        };
        let gate = gate(
            Some(Identity::new("u1")),
            Ok(Some(profile)),
            expect_replace("/onboarding/terms"),
            silent_notices(),
        );

        let decision = gate
            .check_onboarding_page(OnboardingStep::ContactInfo, "/onboarding/contact-info")
            .await;

        assert_eq!(decision.redirect_target(), Some("/onboarding/terms"));
    }
}
