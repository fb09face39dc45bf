//! Infrastructure adapters for the KakoBingo onboarding gate
//!
//! File and in-memory implementations of the ports declared in
//! `kb_core::ports`.

pub mod fs;
pub mod onboarding;
pub mod profile;
pub mod time;

pub use onboarding::FileProgressSessionRepository;
pub use profile::{FileProfileRepository, InMemoryProfileRepository};
pub use time::SystemClock;
