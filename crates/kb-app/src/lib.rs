//! KakoBingo application layer
//!
//! This crate contains the onboarding use cases and the route gate that
//! orchestrate the pure rules of `kb-core` against the identity service,
//! the profile store, navigation and session storage.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
