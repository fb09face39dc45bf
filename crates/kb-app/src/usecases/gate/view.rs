use kb_core::{AccessPolicy, GateDecision, OnboardingStep};

use super::RouteGate;

/// What a gated page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView<T> {
    /// Blocking loader while the decision is pending.
    Loading,
    /// A redirect was issued; render nothing.
    Redirecting { target: String },
    /// The page content.
    Content(T),
}

/// Render-side wrapper around a gate decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedPage {
    decision: GateDecision,
}

impl Default for ProtectedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectedPage {
    /// A page whose gate has not answered yet.
    pub fn new() -> Self {
        Self {
            decision: GateDecision::Checking,
        }
    }

    /// Runs the page gate and keeps its decision.
    pub async fn enter(gate: &RouteGate, requested_path: &str, policy: AccessPolicy) -> Self {
        Self {
            decision: gate.check_page(requested_path, policy).await,
        }
    }

    /// Runs the onboarding step gate for `page`.
    pub async fn enter_onboarding(gate: &RouteGate, page: OnboardingStep, requested_path: &str) -> Self {
        Self {
            decision: gate.check_onboarding_page(page, requested_path).await,
        }
    }

    pub fn decision(&self) -> &GateDecision {
        &self.decision
    }

    /// Produces the children only for an `Allow` decision; `children` is
    /// not called otherwise.
    pub fn render<T>(&self, children: impl FnOnce() -> T) -> GateView<T> {
        match &self.decision {
            GateDecision::Checking => GateView::Loading,
            GateDecision::Allow => GateView::Content(children()),
            other => GateView::Redirecting {
                target: other.redirect_target().unwrap_or_default().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_page_shows_loader_without_building_content() {
        let page = ProtectedPage::new();
        let view = page.render(|| -> &'static str { panic!("content must not be built while checking") });
        assert_eq!(view, GateView::Loading);
    }

    #[test]
    fn redirect_decision_renders_nothing() {
        let page = ProtectedPage {
            decision: GateDecision::RedirectUnauthorized {
                target: "/unauthorized".into(),
            },
        };
        let view = page.render(|| "admin panel");
        assert_eq!(
            view,
            GateView::Redirecting {
                target: "/unauthorized".into()
            }
        );
    }

    #[test]
    fn allowed_page_renders_children() {
        let page = ProtectedPage {
            decision: GateDecision::Allow,
        };
        assert_eq!(page.render(|| 42), GateView::Content(42));
    }
}
