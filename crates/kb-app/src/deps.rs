//! # Application Dependencies
//!
//! Parameter grouping for wiring the use cases. This is NOT a Builder:
//! no build steps, no defaults, no hidden logic.

use std::sync::Arc;

use kb_core::ports::*;
use kb_core::AppConfig;

/// Application dependency grouping.
///
/// All dependencies are required.
#[derive(Clone)]
pub struct AppDeps {
    // Collaborators
    pub identity: Arc<dyn IdentityPort>,
    pub profiles: Arc<dyn ProfileRepositoryPort>,

    // Client surface
    pub navigator: Arc<dyn NavigatorPort>,
    pub notices: Arc<dyn NoticePort>,

    // Session storage
    pub progress_session: Arc<dyn ProgressSessionPort>,

    // System
    pub clock: Arc<dyn ClockPort>,

    pub config: Arc<AppConfig>,
}
