//! Dependency wiring
//!
//! Builds [`AppDeps`] from configuration. Storage adapters come from
//! `kb-infra`; identity, navigation and notices from the host adapters.

use std::sync::Arc;

use kb_app::AppDeps;
use kb_core::{AppConfig, Identity};
use kb_infra::{FileProfileRepository, FileProgressSessionRepository, SystemClock};

use crate::adapters::{RecordingNavigator, StaticIdentity, TracingNoticeSink};

/// Wire the application dependencies for one caller.
///
/// `identity` is the authenticated caller, `None` when signed out. The
/// navigator is returned separately so the caller can read its history.
pub fn wire_dependencies(
    config: AppConfig,
    identity: Option<Identity>,
) -> (AppDeps, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let identity = match identity {
        Some(identity) => StaticIdentity::signed_in(identity),
        None => StaticIdentity::signed_out(),
    };

    let deps = AppDeps {
        identity: Arc::new(identity),
        profiles: Arc::new(FileProfileRepository::new(
            config.storage.profiles_path.clone(),
        )),
        navigator: navigator.clone(),
        notices: Arc::new(TracingNoticeSink),
        progress_session: Arc::new(FileProgressSessionRepository::new(
            config.storage.progress_path.clone(),
        )),
        clock: Arc::new(SystemClock),
        config: Arc::new(config),
    };

    (deps, navigator)
}
