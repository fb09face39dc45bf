//! Application runtime
//!
//! Holds the wired dependencies and hands out use cases through
//! [`UseCases`].

use kb_app::usecases::{GetOnboardingStatus, OnboardingSession, RouteGate, SubmitOnboardingStep};
use kb_app::AppDeps;

pub struct AppRuntime {
    pub deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    /// Opens the onboarding session of `uid` from session storage.
    pub async fn open_session(&self, uid: &str) -> OnboardingSession {
        OnboardingSession::open(uid, self.deps.progress_session.clone()).await
    }
}

/// Use case accessor over an [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn route_gate(&self) -> RouteGate {
        let deps = &self.runtime.deps;
        RouteGate::new(
            deps.identity.clone(),
            deps.profiles.clone(),
            deps.navigator.clone(),
            deps.notices.clone(),
            deps.config.clone(),
        )
    }

    pub fn submit_onboarding_step(&self) -> SubmitOnboardingStep {
        let deps = &self.runtime.deps;
        SubmitOnboardingStep::new(
            deps.identity.clone(),
            deps.profiles.clone(),
            deps.navigator.clone(),
            deps.notices.clone(),
            deps.clock.clone(),
            deps.config.clone(),
        )
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::new(self.runtime.deps.profiles.clone())
    }
}
