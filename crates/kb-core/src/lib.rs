//! # kb-core
//!
//! Core domain models and onboarding rules for KakoBingo.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the profile snapshot, the completion predicate, the step resolver, the
//! session progress model and the access policy used by the route gate.

pub mod access;
pub mod config;
pub mod gate;
pub mod onboarding;
pub mod ports;
pub mod profile;

pub use access::{AccessPolicy, AdminLevel, ParseAdminLevelError};
pub use config::AppConfig;
pub use gate::{GateDecision, GateInput};
pub use onboarding::{
    is_complete, next_step, OnboardingProgress, OnboardingStatus, OnboardingStep, StepSubmission,
};
pub use profile::{
    Identity, ParseRoleError, ProfileDocument, ProfilePatch, ProfileSnapshot, Role,
};
