//! Profile document store port

use async_trait::async_trait;

use super::ServiceError;
use crate::profile::{ProfileDocument, ProfilePatch};

#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Fetch the profile document of `uid`; `None` if it was never created.
    async fn fetch_profile(&self, uid: &str) -> Result<Option<ProfileDocument>, ServiceError>;

    /// Merge the set fields of `patch` into the document of `uid`,
    /// creating the document when missing.
    async fn update_fields(&self, uid: &str, patch: &ProfilePatch) -> Result<(), ServiceError>;
}
