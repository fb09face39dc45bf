use async_trait::async_trait;

use kb_core::ports::{IdentityPort, ServiceError};
use kb_core::Identity;

/// Identity fixed at startup, `None` for a signed-out caller.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    identity: Option<Identity>,
}

impl StaticIdentity {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityPort for StaticIdentity {
    async fn current_identity(&self) -> Result<Option<Identity>, ServiceError> {
        Ok(self.identity.clone())
    }
}
