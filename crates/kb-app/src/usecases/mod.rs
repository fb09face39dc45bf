//! Business logic use cases
//!
//! RouteGate                       → every page load (pages and step pages)
//! OnboardingSession               → wizard lifetime (entry → finish / sign-out)
//! SubmitOnboardingStep            → each step's submit button
//! GetOnboardingStatus             → wizard header / diagnostics

pub mod gate;
pub mod onboarding;

pub use gate::{GateView, ProtectedPage, RouteGate};
pub use onboarding::{
    GetOnboardingStatus, OnboardingSession, OnboardingStatusDto, ProgressStore,
    SubmitOnboardingStep, SubmitOutcome, SubmitStepError,
};
