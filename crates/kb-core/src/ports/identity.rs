use async_trait::async_trait;

use super::ServiceError;
use crate::profile::Identity;

#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Currently authenticated identity, `None` when signed out.
    async fn current_identity(&self) -> Result<Option<Identity>, ServiceError>;
}
