//! Profile domain models
//!
//! The profile document is the durable source of truth for onboarding
//! decisions. [`ProfileSnapshot`] is the typed, read-only projection of the
//! fields the gate cares about.

mod document;
mod lenient;
mod patch;
mod snapshot;

pub use document::{Identity, ParseRoleError, ProfileDocument, Role};
pub use patch::ProfilePatch;
pub use snapshot::ProfileSnapshot;

/// Returns true when an optional text field carries a non-blank value.
pub(crate) fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
