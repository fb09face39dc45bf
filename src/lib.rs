//! KakoBingo onboarding gate
//!
//! Binary-side wiring: configuration and tracing bootstrap, the runtime that
//! hands out use cases, host adapters for identity, navigation and notices,
//! and the command line front end.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
