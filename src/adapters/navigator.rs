use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use kb_core::ports::NavigatorPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub kind: NavigationKind,
    pub path: String,
}

/// Navigator that logs and remembers every navigation request.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    fn record(&self, kind: NavigationKind, path: &str) {
        info!(kind = ?kind, path, "navigate");
        if let Ok(mut history) = self.history.lock() {
            history.push(Navigation {
                kind,
                path: path.to_string(),
            });
        }
    }
}

impl NavigatorPort for RecordingNavigator {
    fn push(&self, path: &str) {
        self.record(NavigationKind::Push, path);
    }

    fn replace(&self, path: &str) {
        self.record(NavigationKind::Replace, path);
    }
}
